//! Mapping-engine interface.

use sophia_inmem::graph::FastGraph;

use crate::config::EngineConfiguration;
use crate::error::EngineError;

/// A relational-to-graph mapping engine.
///
/// Implementations read the mapping document named by the configuration,
/// query the backing relational database, and return the produced
/// statements as one in-memory graph. The assembler invokes the engine
/// exactly once per request; ownership of the result graph transfers to
/// the assembler, which merges and discards it.
///
/// Execution is synchronous and may be slow, since it performs database
/// and file I/O internally. Concurrent requests may each run their own
/// invocation; any concurrency limit is the engine's own concern. No
/// retries happen at this layer: a failure aborts the request.
pub trait MappingEngine: Send + Sync {
    /// Runs one mapping pass with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the engine's underlying failure, e.g. a malformed mapping
    /// document or a database connection error. The assembler wraps it in
    /// [`AssemblyError::EngineExecutionFailed`](crate::AssemblyError::EngineExecutionFailed)
    /// together with the request context.
    fn execute(&self, config: &EngineConfiguration) -> Result<FastGraph, EngineError>;
}

impl<E: MappingEngine + ?Sized> MappingEngine for std::sync::Arc<E> {
    fn execute(&self, config: &EngineConfiguration) -> Result<FastGraph, EngineError> {
        (**self).execute(config)
    }
}
