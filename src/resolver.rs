//! Resource resolution against a declarative configuration graph.

use std::collections::HashMap;

use sophia_api::prelude::*;
use sophia_api::term::matcher::Any;
use sophia_api::term::{SimpleTerm, TermKind};
use sophia_api::triple::Triple;
use sophia_inmem::graph::FastGraph;

use crate::error::ResolverError;
use crate::model::SharedGraph;
use crate::vocab;

/// Read access to a declarative configuration resource.
///
/// This mirrors the host framework's resolution contract: every property
/// the assembler reads is single-valued, and a resolver must report a
/// distinguishable error when the configuration carries several values
/// rather than silently picking one.
///
/// Properties are identified by their full IRI (see [`crate::vocab`]);
/// error values carry the local name.
pub trait ResourceResolver {
    /// Returns the unique resource value of `property` on `root`, if any.
    ///
    /// # Errors
    ///
    /// [`ResolverError::Ambiguous`] when more than one value exists, and
    /// [`ResolverError::WrongNodeKind`] when the value is a literal.
    fn unique_resource(
        &self,
        root: &SimpleTerm<'static>,
        property: &'static str,
    ) -> Result<Option<SimpleTerm<'static>>, ResolverError>;

    /// Returns the unique literal value of `property` on `root`, if any.
    ///
    /// # Errors
    ///
    /// [`ResolverError::Ambiguous`] when more than one value exists, and
    /// [`ResolverError::WrongNodeKind`] when the value is not a literal.
    fn unique_literal(
        &self,
        root: &SimpleTerm<'static>,
        property: &'static str,
    ) -> Result<Option<String>, ResolverError>;

    /// Opens the graph referenced by `resource`.
    ///
    /// # Errors
    ///
    /// [`ResolverError::UnknownModel`] when the reference does not resolve
    /// to a graph, [`ResolverError::OpenModel`] when the graph store fails
    /// to open it.
    fn open_model(&self, resource: &SimpleTerm<'static>) -> Result<SharedGraph, ResolverError>;
}

/// Resolver backed by an in-memory configuration graph.
///
/// Base models are registered up front under their IRI. This is the
/// stand-alone counterpart of a host framework's resolver; hosts with
/// their own configuration machinery implement [`ResourceResolver`]
/// directly instead.
pub struct ConfigGraphResolver {
    config: FastGraph,
    models: HashMap<String, SharedGraph>,
}

impl ConfigGraphResolver {
    /// Creates a resolver over `config`.
    #[must_use]
    pub fn new(config: FastGraph) -> Self {
        Self {
            config,
            models: HashMap::new(),
        }
    }

    /// Registers `graph` as the model behind `iri`.
    #[must_use]
    pub fn with_model(mut self, iri: impl Into<String>, graph: SharedGraph) -> Self {
        self.models.insert(iri.into(), graph);
        self
    }

    /// Collects every value of `property` on `root`, enforcing the
    /// at-most-one contract.
    fn unique_value(
        &self,
        root: &SimpleTerm<'static>,
        property: &'static str,
    ) -> Result<Option<SimpleTerm<'static>>, ResolverError> {
        let prop = IriRef::new_unchecked(property);
        let mut values: Vec<SimpleTerm<'static>> = Vec::new();
        for triple in self.config.triples_matching([root.borrow_term()], [prop], Any) {
            let triple = triple.unwrap_or_else(|e| unreachable!("in-memory graph error: {e:?}"));
            values.push(triple.o().into_term());
        }
        match values.len() {
            0 => Ok(None),
            1 => Ok(values.pop()),
            count => Err(ResolverError::Ambiguous {
                property: vocab::local_name(property),
                count,
            }),
        }
    }
}

impl ResourceResolver for ConfigGraphResolver {
    fn unique_resource(
        &self,
        root: &SimpleTerm<'static>,
        property: &'static str,
    ) -> Result<Option<SimpleTerm<'static>>, ResolverError> {
        match self.unique_value(root, property)? {
            None => Ok(None),
            Some(value) => match value.kind() {
                TermKind::Iri | TermKind::BlankNode => Ok(Some(value)),
                _ => Err(ResolverError::WrongNodeKind {
                    property: vocab::local_name(property),
                }),
            },
        }
    }

    fn unique_literal(
        &self,
        root: &SimpleTerm<'static>,
        property: &'static str,
    ) -> Result<Option<String>, ResolverError> {
        match self.unique_value(root, property)? {
            None => Ok(None),
            Some(value) => match value.lexical_form() {
                Some(lex) => Ok(Some(lex.to_string())),
                None => Err(ResolverError::WrongNodeKind {
                    property: vocab::local_name(property),
                }),
            },
        }
    }

    fn open_model(&self, resource: &SimpleTerm<'static>) -> Result<SharedGraph, ResolverError> {
        let Some(iri) = resource.iri() else {
            return Err(ResolverError::UnknownModel {
                reference: format!("{resource:?}"),
            });
        };
        self.models
            .get(iri.as_str())
            .cloned()
            .ok_or_else(|| ResolverError::UnknownModel {
                reference: format!("<{}>", iri.as_str()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::new_shared;

    const REQ: &str = "http://example.org/req";
    const BASE: &str = "http://example.org/base";

    fn root() -> SimpleTerm<'static> {
        IriRef::new_unchecked(REQ).into_term()
    }

    fn config_graph() -> FastGraph {
        let mut g = FastGraph::new();
        g.insert(
            IriRef::new_unchecked(REQ),
            IriRef::new_unchecked(vocab::BASE_MODEL),
            IriRef::new_unchecked(BASE),
        )
        .expect("insert");
        g.insert(
            IriRef::new_unchecked(REQ),
            IriRef::new_unchecked(vocab::MAPPING_FILE),
            "map.ttl",
        )
        .expect("insert");
        g
    }

    #[test]
    fn unique_literal_returns_the_lexical_form() {
        let resolver = ConfigGraphResolver::new(config_graph());
        let value = resolver
            .unique_literal(&root(), vocab::MAPPING_FILE)
            .expect("resolve");
        assert_eq!(value.as_deref(), Some("map.ttl"));
    }

    #[test]
    fn absent_property_is_none_not_an_error() {
        let resolver = ConfigGraphResolver::new(config_graph());
        let value = resolver
            .unique_literal(&root(), vocab::USER)
            .expect("resolve");
        assert!(value.is_none());
    }

    #[test]
    fn duplicate_values_are_ambiguous() {
        let mut g = config_graph();
        g.insert(
            IriRef::new_unchecked(REQ),
            IriRef::new_unchecked(vocab::MAPPING_FILE),
            "other.ttl",
        )
        .expect("insert");
        let resolver = ConfigGraphResolver::new(g);
        let err = resolver
            .unique_literal(&root(), vocab::MAPPING_FILE)
            .expect_err("two values");
        assert!(matches!(
            err,
            ResolverError::Ambiguous {
                property: "mappingFile",
                count: 2
            }
        ));
    }

    #[test]
    fn resource_where_literal_expected_is_rejected() {
        let resolver = ConfigGraphResolver::new(config_graph());
        let err = resolver
            .unique_literal(&root(), vocab::BASE_MODEL)
            .expect_err("resource value");
        assert!(matches!(
            err,
            ResolverError::WrongNodeKind {
                property: "baseModel"
            }
        ));
    }

    #[test]
    fn literal_where_resource_expected_is_rejected() {
        let resolver = ConfigGraphResolver::new(config_graph());
        let err = resolver
            .unique_resource(&root(), vocab::MAPPING_FILE)
            .expect_err("literal value");
        assert!(matches!(
            err,
            ResolverError::WrongNodeKind {
                property: "mappingFile"
            }
        ));
    }

    #[test]
    fn open_model_finds_registered_graphs() {
        let resolver =
            ConfigGraphResolver::new(config_graph()).with_model(BASE, new_shared(FastGraph::new()));
        let base: SimpleTerm<'static> = IriRef::new_unchecked(BASE).into_term();
        assert!(resolver.open_model(&base).is_ok());
    }

    #[test]
    fn open_model_rejects_unknown_references() {
        let resolver = ConfigGraphResolver::new(config_graph());
        let base: SimpleTerm<'static> = IriRef::new_unchecked(BASE).into_term();
        let err = resolver.open_model(&base).err().expect("unregistered");
        assert!(matches!(err, ResolverError::UnknownModel { .. }));
    }
}
