//! The mapping assembler: parameter resolution, engine invocation, and
//! graph composition.

use sophia_api::term::SimpleTerm;
use sophia_inmem::graph::FastGraph;

use crate::config::EngineConfiguration;
use crate::engine::MappingEngine;
use crate::error::{AssemblyError, ResolverError};
use crate::model::{self, SharedGraph};
use crate::resolver::ResourceResolver;
use crate::vocab;

/// How engine output is combined with the base graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionMode {
    /// Compose into a fresh in-memory graph seeded with an eager copy of
    /// the base graph's statements; the base graph is never written to.
    ///
    /// The default. Assembling for read or query purposes must not persist
    /// engine output into a base graph that is backed by durable storage.
    #[default]
    Isolated,
    /// Insert engine output directly into the base graph and return the
    /// same handle. Writes through to any durable backing of the base
    /// graph; the caller must guarantee no concurrent writer on it while
    /// composition is in progress.
    Mutating,
}

/// The narrow contract a graph-type extension implements.
///
/// Instances are registered by reference in the
/// [`ExtensionRegistry`](crate::registry::ExtensionRegistry), which
/// dispatches configuration resources typed `r2rml:Model` to them.
pub trait GraphAssembler: Send + Sync {
    /// Assembles the graph described by the configuration resource `root`.
    ///
    /// # Errors
    ///
    /// See [`AssemblyError`] for the failure taxonomy.
    fn open(
        &self,
        root: &SimpleTerm<'static>,
        resolver: &dyn ResourceResolver,
    ) -> Result<SharedGraph, AssemblyError>;
}

/// A fully resolved and validated assembly request.
#[derive(Debug, Clone)]
pub struct AssemblyRequest {
    /// The resource the base graph is opened from.
    pub base_model: SimpleTerm<'static>,
    /// Parameters handed to the mapping engine.
    pub config: EngineConfiguration,
}

/// Orchestrates one mapping-assembly request end to end.
///
/// Each request is independent: the assembler holds no per-request state,
/// so one instance may serve concurrent requests, each running its own
/// engine invocation.
pub struct MappingAssembler<E> {
    engine: E,
    mode: CompositionMode,
}

impl<E: MappingEngine> MappingAssembler<E> {
    /// Creates an assembler in the default [`CompositionMode::Isolated`].
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            mode: CompositionMode::Isolated,
        }
    }

    /// Selects the composition mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CompositionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the active composition mode.
    #[must_use]
    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// Executes one request: validates every parameter, opens the base
    /// graph, invokes the engine exactly once, and composes the result
    /// under the active mode.
    ///
    /// All parameters are validated before any I/O happens, so a rejected
    /// request never opens the base graph or reaches the engine. A failed
    /// invocation is reported once; retries belong to the caller.
    ///
    /// # Errors
    ///
    /// See [`AssemblyError`]; the caller receives either a fully composed
    /// graph or a rejection naming the offending field or failure stage.
    pub fn assemble(
        &self,
        root: &SimpleTerm<'static>,
        resolver: &dyn ResourceResolver,
    ) -> Result<SharedGraph, AssemblyError> {
        tracing::info!(mode = ?self.mode, "processing mapping-assembly request");
        let request = resolve_request(root, resolver)?;
        tracing::debug!(config = ?request.config, "resolved engine configuration");

        let base = resolver
            .open_model(&request.base_model)
            .map_err(AssemblyError::BaseGraphUnavailable)?;

        let output = self
            .engine
            .execute(&request.config)
            .map_err(AssemblyError::EngineExecutionFailed)?;

        let composed = compose(self.mode, base, &output);
        tracing::info!(
            triples = model::triple_count(&composed),
            "mapping assembly complete"
        );
        Ok(composed)
    }
}

impl<E: MappingEngine> GraphAssembler for MappingAssembler<E> {
    fn open(
        &self,
        root: &SimpleTerm<'static>,
        resolver: &dyn ResourceResolver,
    ) -> Result<SharedGraph, AssemblyError> {
        self.assemble(root, resolver)
    }
}

/// Resolves and validates every request parameter without performing I/O.
///
/// Required: `r2rml:baseModel` (resource), `r2rml:mappingFile` and
/// `r2rml:connectionURL` (literals). Optional: `r2rml:user`,
/// `r2rml:password`.
///
/// # Errors
///
/// [`AssemblyError::MissingParameter`], [`AssemblyError::AmbiguousParameter`]
/// or [`AssemblyError::InvalidParameter`], naming the offending field.
pub fn resolve_request(
    root: &SimpleTerm<'static>,
    resolver: &dyn ResourceResolver,
) -> Result<AssemblyRequest, AssemblyError> {
    let base_model = resolver
        .unique_resource(root, vocab::BASE_MODEL)
        .map_err(lift)?
        .ok_or(AssemblyError::MissingParameter(vocab::local_name(
            vocab::BASE_MODEL,
        )))?;

    let mapping_file = require_literal(root, resolver, vocab::MAPPING_FILE)?;
    let connection_url = require_literal(root, resolver, vocab::CONNECTION_URL)?;

    let mut config = EngineConfiguration::new(mapping_file, connection_url);
    config.user = resolver.unique_literal(root, vocab::USER).map_err(lift)?;
    config.password = resolver
        .unique_literal(root, vocab::PASSWORD)
        .map_err(lift)?;

    Ok(AssemblyRequest { base_model, config })
}

fn require_literal(
    root: &SimpleTerm<'static>,
    resolver: &dyn ResourceResolver,
    property: &'static str,
) -> Result<String, AssemblyError> {
    resolver
        .unique_literal(root, property)
        .map_err(lift)?
        .ok_or(AssemblyError::MissingParameter(vocab::local_name(property)))
}

/// Maps resolver-side validation failures onto the request taxonomy.
fn lift(err: ResolverError) -> AssemblyError {
    match err {
        ResolverError::Ambiguous { property, .. } => AssemblyError::AmbiguousParameter(property),
        ResolverError::WrongNodeKind { property } => AssemblyError::InvalidParameter(property),
        other @ (ResolverError::UnknownModel { .. } | ResolverError::OpenModel { .. }) => {
            AssemblyError::BaseGraphUnavailable(other)
        }
    }
}

/// Combines engine output with the base graph under `mode`.
fn compose(mode: CompositionMode, base: SharedGraph, output: &FastGraph) -> SharedGraph {
    match mode {
        CompositionMode::Mutating => {
            {
                let mut graph = model::write(&base);
                model::copy_into(&mut graph, output);
            }
            base
        }
        CompositionMode::Isolated => {
            let mut composed = FastGraph::new();
            model::copy_into(&mut composed, &model::read(&base));
            model::copy_into(&mut composed, output);
            model::new_shared(composed)
        }
    }
}
