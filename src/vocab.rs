//! The `r2rml` assembler vocabulary.
//!
//! Property and type IRIs under `http://r2rml#` that a configuration graph
//! uses to declare a mapping-assembly request.

/// The `r2rml` namespace IRI.
pub const NS: &str = "http://r2rml#";

/// The short prefix registered for [`NS`].
pub const PREFIX: &str = "r2rml";

/// IRI of the graph type the mapping assembler is registered under.
///
/// A configuration resource typed `r2rml:Model` is dispatched to the
/// assembler by the extension registry.
pub const MODEL_TYPE: &str = "http://r2rml#Model";

/// `r2rml:baseModel` — reference to the base graph resource (required).
pub const BASE_MODEL: &str = "http://r2rml#baseModel";

/// `r2rml:mappingFile` — path or IRI of the mapping document (required).
pub const MAPPING_FILE: &str = "http://r2rml#mappingFile";

/// `r2rml:connectionURL` — connection URL of the relational database
/// (required).
pub const CONNECTION_URL: &str = "http://r2rml#connectionURL";

/// `r2rml:user` — database user (optional).
pub const USER: &str = "http://r2rml#user";

/// `r2rml:password` — database password (optional).
pub const PASSWORD: &str = "http://r2rml#password";

/// Returns the fragment of `iri` after the final `#`, or `iri` itself when
/// it has no fragment.
///
/// Used to name properties in error values (`"baseModel"` rather than the
/// full IRI).
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rsplit_once('#') {
        Some((_, local)) => local,
        None => iri,
    }
}
