//! Functions: multi-argument, value-returning invocables.

use std::fmt;

use crate::errors::{invocable_failed, InterpResult, RegistryKind};
use crate::registry::{Invocable, Registry};

/// Body signature of an interpreter function.
///
/// Bodies receive positional arguments and either return a value or report
/// a failure message; the registry wraps the message into
/// [`InterpError::InvocableFailed`](crate::InterpError::InvocableFailed).
pub type FunctionBody<V> = Box<dyn Fn(&[V]) -> Result<V, String>>;

/// A named function an interpreter can execute by name.
pub struct InterpreterFunction<V> {
    name: String,
    body: FunctionBody<V>,
}

impl<V> InterpreterFunction<V> {
    /// Create a function from a name and a body closure.
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&[V]) -> Result<V, String> + 'static,
    ) -> Self {
        InterpreterFunction {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Registration name, as given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the body with `args`.
    pub fn call(&self, args: &[V]) -> Result<V, String> {
        (self.body)(args)
    }
}

impl<V> Invocable for InterpreterFunction<V> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<V> fmt::Debug for InterpreterFunction<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpreterFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of [`InterpreterFunction`]s.
///
/// The function specialization of [`Registry`]: same load/unload/exists
/// semantics, plus [`invoke`](Self::invoke) with the args-in/value-out call
/// shape.
#[derive(Debug)]
pub struct FunctionRegistry<V> {
    inner: Registry<InterpreterFunction<V>>,
}

impl<V> FunctionRegistry<V> {
    /// Create an empty function registry.
    pub fn new() -> Self {
        FunctionRegistry {
            inner: Registry::new(RegistryKind::Function),
        }
    }

    /// Register a function under its lower-cased name, replacing any
    /// previous entry with that name.
    pub fn load(&mut self, function: InterpreterFunction<V>) {
        self.inner.load(function);
    }

    /// Remove the function registered under `name`; strict on absence.
    pub fn unload(&mut self, name: &str) -> InterpResult<()> {
        self.inner.unload(name)
    }

    /// Case-insensitive membership check.
    pub fn exists(&self, name: &str) -> bool {
        self.inner.exists(name)
    }

    /// Execute the function registered under `name` with `args`.
    ///
    /// Fails with `UnknownInvocable` when the name is not registered, and
    /// with `InvocableFailed` when the body itself reports an error.
    pub fn invoke(&self, name: &str, args: &[V]) -> InterpResult<V> {
        let function = self.inner.get(name)?;
        tracing::trace!(name = function.name(), "invoke function");
        function
            .call(args)
            .map_err(|message| invocable_failed(RegistryKind::Function, function.name(), message))
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the registered (lower-cased) names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.names()
    }
}

impl<V> Default for FunctionRegistry<V> {
    fn default() -> Self {
        FunctionRegistry::new()
    }
}
