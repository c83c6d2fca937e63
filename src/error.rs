//! Error taxonomy for mapping assembly.
//!
//! Parameter-validation and base-graph failures are surfaced to the caller
//! with no partial result; engine failures carry the underlying cause;
//! registration failures are logged and swallowed by the registrar.

use thiserror::Error;

/// Boxed failure cause reported by a [`MappingEngine`](crate::MappingEngine)
/// implementation.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while resolving configuration values or opening models.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// A single-valued property carried more than one value.
    #[error("more than one r2rml:{property} specified ({count} values)")]
    Ambiguous {
        /// Local name of the offending property.
        property: &'static str,
        /// Number of values found.
        count: usize,
    },
    /// A property value had the wrong node kind, e.g. a resource where a
    /// literal is required.
    #[error("r2rml:{property} has a value of the wrong node kind")]
    WrongNodeKind {
        /// Local name of the offending property.
        property: &'static str,
    },
    /// The referenced model is not known to the resolver.
    #[error("no model registered for {reference}")]
    UnknownModel {
        /// The model reference, as an IRI or term rendering.
        reference: String,
    },
    /// The referenced model exists but the graph store failed to open it.
    #[error("cannot open model {reference}")]
    OpenModel {
        /// The model reference.
        reference: String,
        /// Underlying failure from the graph store.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Errors raised by one mapping-assembly request.
///
/// A request either yields a fully composed graph or exactly one of these,
/// naming the offending field or the failure stage.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A required request property was absent. Raised before any I/O.
    #[error("no r2rml:{0} specified")]
    MissingParameter(&'static str),
    /// A single-valued request property carried more than one value.
    /// Raised before any I/O; the assembler never silently picks one.
    #[error("more than one r2rml:{0} specified")]
    AmbiguousParameter(&'static str),
    /// A request property value had the wrong node kind. Raised before any
    /// I/O.
    #[error("r2rml:{0} has a value of the wrong node kind")]
    InvalidParameter(&'static str),
    /// The referenced base graph could not be opened; nothing was merged.
    #[error("base graph could not be opened")]
    BaseGraphUnavailable(#[source] ResolverError),
    /// The mapping engine failed; nothing was merged.
    #[error("mapping engine execution failed")]
    EngineExecutionFailed(#[source] EngineError),
}

/// Non-fatal registration failures.
///
/// The registrar logs these and carries on: a failed registration affects
/// future discoverability, never the current request.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The prefix is already mapped to a different namespace IRI.
    #[error("prefix `{prefix}` already maps to <{existing}>")]
    PrefixConflict {
        /// The short prefix being registered.
        prefix: String,
        /// The namespace IRI it already maps to.
        existing: String,
    },
    /// The type IRI already dispatches to another assembler.
    #[error("type <{type_iri}> already has an assembler")]
    TypeConflict {
        /// The contested type IRI.
        type_iri: String,
    },
}
