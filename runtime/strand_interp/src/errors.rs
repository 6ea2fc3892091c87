//! Error types for registry and interpreter operations.
//!
//! There is one error enum for the whole substrate. Function and filter
//! registries share it: which registry raised is carried in the
//! [`RegistryKind`] discriminator rather than in separate error types, so
//! the registry pattern stays uniform across both specializations.

use std::fmt;

use thiserror::Error;

/// Result of a registry or interpreter operation.
pub type InterpResult<T> = Result<T, InterpError>;

/// Which registry an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// Multi-argument, value-returning invocables.
    Function,
    /// Single-argument, in-place transforming invocables.
    Filter,
}

impl RegistryKind {
    /// Lower-case label used in error messages and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            RegistryKind::Function => "function",
            RegistryKind::Filter => "filter",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by registry and interpreter operations.
///
/// Every variant is a hard failure of the operation that raised it. The
/// substrate attempts no recovery: no retry, no fallback invocable, no
/// partial application. A concrete interpreter's `run()` normally lets these
/// propagate with `?`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpError {
    /// `unload` was called for a name that is not registered.
    ///
    /// Unload is strict where load is not: unloading something never loaded
    /// is treated as a caller bug, not a no-op.
    #[error("{kind} `{name}` could not be unloaded because it is not loaded")]
    NotLoaded {
        /// Registry that raised the error.
        kind: RegistryKind,
        /// Lower-cased name that was looked up.
        name: String,
    },

    /// An invoke or apply named something that is not registered.
    #[error("{kind} `{name}` does not exist; maybe it is not loaded?")]
    UnknownInvocable {
        /// Registry that raised the error.
        kind: RegistryKind,
        /// Lower-cased name that was looked up.
        name: String,
    },

    /// A function body reported a failure.
    #[error("{kind} `{name}` failed: {message}")]
    InvocableFailed {
        /// Registry that raised the error.
        kind: RegistryKind,
        /// Lower-cased name of the failing invocable.
        name: String,
        /// Message produced by the body.
        message: String,
    },
}

impl InterpError {
    /// Registry the error refers to.
    pub fn kind(&self) -> RegistryKind {
        match self {
            InterpError::NotLoaded { kind, .. }
            | InterpError::UnknownInvocable { kind, .. }
            | InterpError::InvocableFailed { kind, .. } => *kind,
        }
    }

    /// Invocable name the error refers to.
    pub fn name(&self) -> &str {
        match self {
            InterpError::NotLoaded { name, .. }
            | InterpError::UnknownInvocable { name, .. }
            | InterpError::InvocableFailed { name, .. } => name,
        }
    }
}

/// Build a [`InterpError::NotLoaded`] error.
pub fn not_loaded(kind: RegistryKind, name: impl Into<String>) -> InterpError {
    InterpError::NotLoaded {
        kind,
        name: name.into(),
    }
}

/// Build a [`InterpError::UnknownInvocable`] error.
pub fn unknown_invocable(kind: RegistryKind, name: impl Into<String>) -> InterpError {
    InterpError::UnknownInvocable {
        kind,
        name: name.into(),
    }
}

/// Build a [`InterpError::InvocableFailed`] error.
pub fn invocable_failed(
    kind: RegistryKind,
    name: impl Into<String>,
    message: impl Into<String>,
) -> InterpError {
    InterpError::InvocableFailed {
        kind,
        name: name.into(),
        message: message.into(),
    }
}
