//! Filters: single-argument invocables that transform a value in place.
//!
//! Filtering is a capability, not part of the base interpreter: an
//! interpreter that wants it holds a [`FilterRegistry`] and implements
//! [`HasFilters`] by exposing that storage. The provided methods then give
//! it the full load/unload/exists/apply surface.

use std::fmt;

use crate::errors::{InterpResult, RegistryKind};
use crate::registry::{Invocable, Registry};

/// Body signature of an interpreter filter.
///
/// A filter mutates the value it is given and returns nothing.
pub type FilterBody<V> = Box<dyn Fn(&mut V)>;

/// A named filter an interpreter can apply to a value by name.
pub struct InterpreterFilter<V> {
    name: String,
    body: FilterBody<V>,
}

impl<V> InterpreterFilter<V> {
    /// Create a filter from a name and a body closure.
    pub fn new(name: impl Into<String>, body: impl Fn(&mut V) + 'static) -> Self {
        InterpreterFilter {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Registration name, as given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the body to `value` in place.
    pub fn apply(&self, value: &mut V) {
        (self.body)(value);
    }
}

impl<V> Invocable for InterpreterFilter<V> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<V> fmt::Debug for InterpreterFilter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpreterFilter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of [`InterpreterFilter`]s.
///
/// The filter specialization of [`Registry`]: same load/unload/exists
/// semantics as the function registry, with the value-in-out call shape.
/// Errors carry [`RegistryKind::Filter`] as the discriminator.
#[derive(Debug)]
pub struct FilterRegistry<V> {
    inner: Registry<InterpreterFilter<V>>,
}

impl<V> FilterRegistry<V> {
    /// Create an empty filter registry.
    pub fn new() -> Self {
        FilterRegistry {
            inner: Registry::new(RegistryKind::Filter),
        }
    }

    /// Register a filter under its lower-cased name, replacing any previous
    /// entry with that name.
    pub fn load(&mut self, filter: InterpreterFilter<V>) {
        self.inner.load(filter);
    }

    /// Remove the filter registered under `name`; strict on absence.
    pub fn unload(&mut self, name: &str) -> InterpResult<()> {
        self.inner.unload(name)
    }

    /// Case-insensitive membership check.
    pub fn exists(&self, name: &str) -> bool {
        self.inner.exists(name)
    }

    /// Apply the filter registered under `name` to `value` in place.
    ///
    /// Fails with `UnknownInvocable` when the name is not registered.
    pub fn apply(&self, name: &str, value: &mut V) -> InterpResult<()> {
        let filter = self.inner.get(name)?;
        tracing::trace!(name = filter.name(), "apply filter");
        filter.apply(value);
        Ok(())
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no filters are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the registered (lower-cased) names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.names()
    }
}

impl<V> Default for FilterRegistry<V> {
    fn default() -> Self {
        FilterRegistry::new()
    }
}

/// Capability trait for interpreters that transform values through named
/// filters.
///
/// Implementors supply the storage accessors; the four filter operations
/// come for free as provided methods. This replaces inheritance with
/// composition: unrelated interpreter types share one registry
/// implementation by each holding a [`FilterRegistry`].
pub trait HasFilters<V> {
    /// The filter registry owned by this interpreter.
    fn filters(&self) -> &FilterRegistry<V>;

    /// Mutable access to the filter registry owned by this interpreter.
    fn filters_mut(&mut self) -> &mut FilterRegistry<V>;

    /// Register a filter for this interpreter.
    fn load_filter(&mut self, filter: InterpreterFilter<V>) {
        self.filters_mut().load(filter);
    }

    /// Remove a loaded filter; fails with `NotLoaded` if it never was.
    fn unload_filter(&mut self, name: &str) -> InterpResult<()> {
        self.filters_mut().unload(name)
    }

    /// Check if a filter is loaded, ignoring case.
    fn filter_exists(&self, name: &str) -> bool {
        self.filters().exists(name)
    }

    /// Apply a loaded filter to `value` in place.
    fn apply_filter(&self, name: &str, value: &mut V) -> InterpResult<()> {
        self.filters().apply(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InterpError;
    use pretty_assertions::assert_eq;

    fn trim() -> InterpreterFilter<String> {
        InterpreterFilter::new("trim", |value: &mut String| {
            *value = value.trim().to_string();
        })
    }

    #[test]
    fn test_apply_mutates_in_place() {
        let mut reg = FilterRegistry::new();
        reg.load(trim());
        let mut data = "  hi  ".to_string();
        assert!(reg.apply("trim", &mut data).is_ok());
        assert_eq!(data, "hi");
    }

    #[test]
    fn test_apply_is_case_insensitive() {
        let mut reg = FilterRegistry::new();
        reg.load(InterpreterFilter::new("Trim", |value: &mut String| {
            *value = value.trim().to_string();
        }));
        let mut data = " x ".to_string();
        assert!(reg.apply("TRIM", &mut data).is_ok());
        assert_eq!(data, "x");
    }

    #[test]
    fn test_apply_unknown_filter_fails() {
        let reg: FilterRegistry<String> = FilterRegistry::new();
        let mut data = "untouched".to_string();
        let err = reg.apply("missing", &mut data);
        assert!(matches!(
            err,
            Err(InterpError::UnknownInvocable { kind: RegistryKind::Filter, name }) if name == "missing"
        ));
        assert_eq!(data, "untouched");
    }

    #[test]
    fn test_unload_unknown_filter_fails() {
        let mut reg: FilterRegistry<String> = FilterRegistry::new();
        assert!(matches!(
            reg.unload("missing"),
            Err(InterpError::NotLoaded { kind: RegistryKind::Filter, .. })
        ));
    }

    #[test]
    fn test_capability_trait_provides_full_surface() {
        struct Holder {
            filters: FilterRegistry<String>,
        }

        impl HasFilters<String> for Holder {
            fn filters(&self) -> &FilterRegistry<String> {
                &self.filters
            }

            fn filters_mut(&mut self) -> &mut FilterRegistry<String> {
                &mut self.filters
            }
        }

        let mut holder = Holder {
            filters: FilterRegistry::new(),
        };
        holder.load_filter(trim());
        assert!(holder.filter_exists("TRIM"));

        let mut data = "  padded  ".to_string();
        assert!(holder.apply_filter("trim", &mut data).is_ok());
        assert_eq!(data, "padded");

        assert!(holder.unload_filter("trim").is_ok());
        assert!(!holder.filter_exists("trim"));
    }
}
