//! Process-wide prefix and extension registries.
//!
//! Registration is best-effort infrastructure: it affects how future
//! requests are discovered and dispatched, never the outcome of a request
//! already in flight. Failures are therefore logged and swallowed.
//!
//! Both registries are plain instantiable types, so hosts (and tests) can
//! scope their own; the process-wide instances are reachable through
//! [`prefixes`] and [`extensions`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once, OnceLock, PoisonError};

use crate::assembler::GraphAssembler;
use crate::error::RegistryError;
use crate::vocab;

/// Maps short prefixes to namespace IRIs.
#[derive(Debug, Default)]
pub struct PrefixRegistry {
    map: Mutex<HashMap<String, String>>,
}

impl PrefixRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `prefix` to `uri`.
    ///
    /// Registering the same mapping again is a no-op.
    ///
    /// # Errors
    ///
    /// [`RegistryError::PrefixConflict`] when the prefix already maps to a
    /// different namespace IRI; the existing mapping is kept.
    pub fn add_prefix_mapping(&self, prefix: &str, uri: &str) -> Result<(), RegistryError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        match map.get(prefix) {
            Some(existing) if existing != uri => Err(RegistryError::PrefixConflict {
                prefix: prefix.to_string(),
                existing: existing.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                map.insert(prefix.to_string(), uri.to_string());
                Ok(())
            }
        }
    }

    /// Returns the namespace IRI mapped to `prefix`, if any.
    #[must_use]
    pub fn expansion(&self, prefix: &str) -> Option<String> {
        self.map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prefix)
            .cloned()
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the registry holds no mapping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dispatches graph-type IRIs to registered [`GraphAssembler`]s.
#[derive(Default)]
pub struct ExtensionRegistry {
    map: Mutex<HashMap<String, Arc<dyn GraphAssembler>>>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `assembler` for resources typed `type_iri`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TypeConflict`] when the type already has an
    /// assembler; the existing registration is kept.
    pub fn implement_with(
        &self,
        type_iri: &str,
        assembler: Arc<dyn GraphAssembler>,
    ) -> Result<(), RegistryError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(type_iri) {
            return Err(RegistryError::TypeConflict {
                type_iri: type_iri.to_string(),
            });
        }
        map.insert(type_iri.to_string(), assembler);
        Ok(())
    }

    /// Returns the assembler registered for `type_iri`, if any.
    #[must_use]
    pub fn assembler_for(&self, type_iri: &str) -> Option<Arc<dyn GraphAssembler>> {
        self.map
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_iri)
            .cloned()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the registry holds no registration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide prefix registry.
#[must_use]
pub fn prefixes() -> &'static PrefixRegistry {
    static PREFIXES: OnceLock<PrefixRegistry> = OnceLock::new();
    PREFIXES.get_or_init(PrefixRegistry::new)
}

/// The process-wide extension registry.
#[must_use]
pub fn extensions() -> &'static ExtensionRegistry {
    static EXTENSIONS: OnceLock<ExtensionRegistry> = OnceLock::new();
    EXTENSIONS.get_or_init(ExtensionRegistry::new)
}

/// Registers the mapping assembler with the process-wide registries.
///
/// Idempotent and safe to call concurrently: the first call registers the
/// `r2rml` prefix mapping and the `r2rml:Model` type, later calls are
/// no-ops and drop their `assembler` argument. Registration failures are
/// logged and swallowed; they affect future discoverability, not any
/// current request.
pub fn ensure_registered(assembler: Arc<dyn GraphAssembler>) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing::info!(type_iri = vocab::MODEL_TYPE, "registering mapping assembler");
        if let Err(err) = prefixes().add_prefix_mapping(vocab::PREFIX, vocab::NS) {
            tracing::warn!(error = %err, "prefix registration failed");
        }
        if let Err(err) = extensions().implement_with(vocab::MODEL_TYPE, assembler) {
            tracing::warn!(error = %err, "extension registration failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use sophia_api::term::SimpleTerm;

    use super::*;
    use crate::error::AssemblyError;
    use crate::model::SharedGraph;
    use crate::resolver::ResourceResolver;

    struct NullAssembler;

    impl GraphAssembler for NullAssembler {
        fn open(
            &self,
            _root: &SimpleTerm<'static>,
            _resolver: &dyn ResourceResolver,
        ) -> Result<SharedGraph, AssemblyError> {
            Err(AssemblyError::MissingParameter("baseModel"))
        }
    }

    #[test]
    fn prefix_remapping_is_idempotent() {
        let registry = PrefixRegistry::new();
        registry.add_prefix_mapping("r2rml", "http://r2rml#").expect("first");
        registry.add_prefix_mapping("r2rml", "http://r2rml#").expect("again");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.expansion("r2rml").as_deref(), Some("http://r2rml#"));
    }

    #[test]
    fn conflicting_prefix_is_rejected_and_kept() {
        let registry = PrefixRegistry::new();
        registry.add_prefix_mapping("r2rml", "http://r2rml#").expect("first");
        let err = registry
            .add_prefix_mapping("r2rml", "http://elsewhere#")
            .expect_err("conflict");
        assert!(matches!(err, RegistryError::PrefixConflict { .. }));
        assert_eq!(registry.expansion("r2rml").as_deref(), Some("http://r2rml#"));
    }

    #[test]
    fn duplicate_type_registration_is_rejected() {
        let registry = ExtensionRegistry::new();
        registry
            .implement_with(vocab::MODEL_TYPE, Arc::new(NullAssembler))
            .expect("first");
        let err = registry
            .implement_with(vocab::MODEL_TYPE, Arc::new(NullAssembler))
            .expect_err("duplicate");
        assert!(matches!(err, RegistryError::TypeConflict { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_returns_the_registered_assembler() {
        let registry = ExtensionRegistry::new();
        assert!(registry.is_empty());
        registry
            .implement_with(vocab::MODEL_TYPE, Arc::new(NullAssembler))
            .expect("register");
        assert!(registry.assembler_for(vocab::MODEL_TYPE).is_some());
        assert!(registry.assembler_for("http://r2rml#Other").is_none());
    }
}
