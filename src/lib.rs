//! R2RML mapping assembler.
//!
//! Given a declarative configuration resource typed `r2rml:Model`, the
//! assembler resolves the invocation parameters, runs a relational-to-RDF
//! [`MappingEngine`] exactly once, and composes the engine's output with a
//! pre-existing base graph. It is the glue between a declarative
//! configuration graph and the mapping engine proper: no mapping parsing,
//! no SQL, no RDF term construction happens here.
//!
//! # Request shape
//!
//! A request resource carries, under the `http://r2rml#` namespace:
//! `baseModel` (resource, required), `mappingFile` and `connectionURL`
//! (literals, required), `user` and `password` (literals, optional). Each
//! property is single-valued; a second value rejects the request instead
//! of being silently ignored.
//!
//! # Composition modes
//!
//! [`CompositionMode::Isolated`] (the default) copies the base graph into
//! a fresh in-memory graph and merges engine output there, leaving the
//! base graph byte-for-byte unchanged. [`CompositionMode::Mutating`]
//! inserts engine output directly into the base graph and returns the
//! same handle, writing through to any durable backing.
//!
//! # Example
//!
//! ```
//! use sophia_api::prelude::*;
//! use sophia_api::term::SimpleTerm;
//! use sophia_inmem::graph::FastGraph;
//!
//! use r2rml_assembler::{
//!     model, vocab, ConfigGraphResolver, EngineConfiguration, EngineError, MappingAssembler,
//!     MappingEngine,
//! };
//!
//! /// Engine stub producing one fixed triple.
//! struct FixedEngine;
//!
//! impl MappingEngine for FixedEngine {
//!     fn execute(&self, _config: &EngineConfiguration) -> Result<FastGraph, EngineError> {
//!         let mut g = FastGraph::new();
//!         g.insert(
//!             IriRef::new_unchecked("http://example.org/alice"),
//!             IriRef::new_unchecked("http://example.org/name"),
//!             "Alice",
//!         )?;
//!         Ok(g)
//!     }
//! }
//!
//! const REQ: &str = "http://example.org/mapping";
//!
//! let mut config = FastGraph::new();
//! config.insert(
//!     IriRef::new_unchecked(REQ),
//!     IriRef::new_unchecked(vocab::BASE_MODEL),
//!     IriRef::new_unchecked("http://example.org/base"),
//! )?;
//! config.insert(
//!     IriRef::new_unchecked(REQ),
//!     IriRef::new_unchecked(vocab::MAPPING_FILE),
//!     "mapping.ttl",
//! )?;
//! config.insert(
//!     IriRef::new_unchecked(REQ),
//!     IriRef::new_unchecked(vocab::CONNECTION_URL),
//!     "jdbc:sqlite:cities.db",
//! )?;
//!
//! let resolver = ConfigGraphResolver::new(config)
//!     .with_model("http://example.org/base", model::new_shared(FastGraph::new()));
//! let assembler = MappingAssembler::new(FixedEngine);
//!
//! let root: SimpleTerm<'static> = IriRef::new_unchecked(REQ).into_term();
//! let composed = assembler.assemble(&root, &resolver)?;
//! assert_eq!(model::triple_count(&composed), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Registration
//!
//! [`registry::ensure_registered`] makes the assembler discoverable under
//! `r2rml:Model` in the process-wide extension registry and registers the
//! `r2rml` prefix mapping. It is idempotent and safe to call from
//! concurrent threads; hosts call it once at startup.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assembler;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod vocab;

pub use assembler::{
    resolve_request, AssemblyRequest, CompositionMode, GraphAssembler, MappingAssembler,
};
pub use config::EngineConfiguration;
pub use engine::MappingEngine;
pub use error::{AssemblyError, EngineError, RegistryError, ResolverError};
pub use model::SharedGraph;
pub use registry::ensure_registered;
pub use resolver::{ConfigGraphResolver, ResourceResolver};
