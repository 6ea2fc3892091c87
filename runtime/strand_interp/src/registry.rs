//! Generic name-keyed registry of invocable units.
//!
//! [`FunctionRegistry`](crate::FunctionRegistry) and
//! [`FilterRegistry`](crate::FilterRegistry) are specializations of this one
//! type; only the call shape differs between them, so the load/unload/exists
//! mechanics live here. Keys are stored lower-cased and every lookup is
//! case-normalized.

use rustc_hash::FxHashMap;

use crate::errors::{not_loaded, unknown_invocable, InterpResult, RegistryKind};

/// A named, callable unit storable in a [`Registry`].
pub trait Invocable {
    /// Registration name. Lookup is case-insensitive; the registry stores
    /// the lower-cased form.
    fn name(&self) -> &str;
}

/// Name-keyed map of invocable units with case-insensitive lookup.
///
/// Within one registry names are unique: loading an item under an existing
/// name silently replaces the previous entry (last write wins), which keeps
/// registration idempotent for re-registration scenarios. Unloading is
/// strict and fails for names that were never loaded.
#[derive(Debug)]
pub struct Registry<I> {
    kind: RegistryKind,
    entries: FxHashMap<String, I>,
}

impl<I: Invocable> Registry<I> {
    /// Create an empty registry of the given kind.
    pub fn new(kind: RegistryKind) -> Self {
        Registry {
            kind,
            entries: FxHashMap::default(),
        }
    }

    /// Which kind of invocables this registry holds.
    #[inline]
    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// Register `item` under its lower-cased name.
    ///
    /// Always succeeds. A collision replaces the previous entry without
    /// error.
    pub fn load(&mut self, item: I) {
        let key = item.name().to_lowercase();
        tracing::debug!(kind = %self.kind, name = %key, "load invocable");
        if self.entries.insert(key, item).is_some() {
            tracing::trace!(kind = %self.kind, "replaced existing entry");
        }
    }

    /// Remove the entry registered under `name`.
    ///
    /// Fails with [`InterpError::NotLoaded`](crate::InterpError::NotLoaded)
    /// when no such entry exists.
    pub fn unload(&mut self, name: &str) -> InterpResult<()> {
        let key = name.to_lowercase();
        match self.entries.remove(&key) {
            Some(_) => {
                tracing::debug!(kind = %self.kind, name = %key, "unload invocable");
                Ok(())
            }
            None => Err(not_loaded(self.kind, key)),
        }
    }

    /// Case-insensitive membership check. Pure, no side effect.
    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Look up the entry registered under `name`.
    ///
    /// Fails with
    /// [`InterpError::UnknownInvocable`](crate::InterpError::UnknownInvocable)
    /// when absent. The specializations build their invoke/apply operations
    /// on top of this.
    pub fn get(&self, name: &str) -> InterpResult<&I> {
        let key = name.to_lowercase();
        self.entries
            .get(&key)
            .ok_or_else(|| unknown_invocable(self.kind, key))
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered (lower-cased) names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InterpError;

    struct Named(&'static str);

    impl Invocable for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn registry() -> Registry<Named> {
        Registry::new(RegistryKind::Function)
    }

    #[test]
    fn test_load_then_exists_any_case() {
        let mut reg = registry();
        reg.load(Named("Upper"));
        assert!(reg.exists("upper"));
        assert!(reg.exists("UPPER"));
        assert!(reg.exists("uPPeR"));
    }

    #[test]
    fn test_load_overwrites_silently() {
        let mut reg = registry();
        reg.load(Named("dup"));
        reg.load(Named("DUP"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_unload_removes_entry() {
        let mut reg = registry();
        reg.load(Named("gone"));
        assert!(reg.unload("GONE").is_ok());
        assert!(!reg.exists("gone"));
    }

    #[test]
    fn test_unload_unknown_is_not_loaded_error() {
        let mut reg = registry();
        let err = reg.unload("missing");
        assert!(matches!(
            err,
            Err(InterpError::NotLoaded { kind: RegistryKind::Function, name }) if name == "missing"
        ));
    }

    #[test]
    fn test_get_unknown_is_unknown_invocable_error() {
        let reg = registry();
        let err = reg.get("absent").err();
        assert!(matches!(
            err,
            Some(InterpError::UnknownInvocable { kind: RegistryKind::Function, name }) if name == "absent"
        ));
    }

    #[test]
    fn test_names_are_stored_lower_cased() {
        let mut reg = registry();
        reg.load(Named("MiXeD"));
        let names: Vec<_> = reg.names().collect();
        assert_eq!(names, ["mixed"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn name_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z][a-zA-Z0-9_]{0,12}"
        }

        proptest! {
            #[test]
            fn exists_ignores_case_on_both_sides(name in name_strategy()) {
                let mut reg = Registry::new(RegistryKind::Filter);
                let leaked: &'static str = Box::leak(name.clone().into_boxed_str());
                reg.load(Named(leaked));
                prop_assert!(reg.exists(&name.to_uppercase()));
                prop_assert!(reg.exists(&name.to_lowercase()));
            }

            #[test]
            fn unload_never_loaded_always_fails(name in name_strategy()) {
                let mut reg: Registry<Named> = Registry::new(RegistryKind::Function);
                prop_assert!(reg.unload(&name).is_err());
            }
        }
    }
}
