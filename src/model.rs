//! Shared graph handles and composition helpers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sophia_api::prelude::*;
use sophia_api::source::StreamError;
use sophia_inmem::graph::FastGraph;

/// Handle to a graph that may be shared with a graph store.
///
/// Resolvers hand these out from
/// [`open_model`](crate::ResourceResolver::open_model). Under mutating
/// composition the same handle is returned to the caller, so additions are
/// visible to every holder, including any durable store behind it.
pub type SharedGraph = Arc<RwLock<FastGraph>>;

/// Wraps a graph in a fresh [`SharedGraph`] handle.
#[must_use]
pub fn new_shared(graph: FastGraph) -> SharedGraph {
    Arc::new(RwLock::new(graph))
}

/// Read-locks a shared graph, recovering the guard from a poisoned lock.
pub(crate) fn read(graph: &SharedGraph) -> RwLockReadGuard<'_, FastGraph> {
    graph.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write-locks a shared graph, recovering the guard from a poisoned lock.
pub(crate) fn write(graph: &SharedGraph) -> RwLockWriteGuard<'_, FastGraph> {
    graph.write().unwrap_or_else(PoisonError::into_inner)
}

/// Copies every triple of `src` into `dst`.
///
/// Both ends are in-memory graphs whose only error is term-index overflow;
/// the unreachable stream error arms are discharged with `unreachable!`.
pub fn copy_into(dst: &mut FastGraph, src: &FastGraph) {
    match dst.insert_all(src.triples()) {
        Ok(_) => {}
        Err(StreamError::SourceError(e)) => unreachable!("in-memory graph source error: {e:?}"),
        Err(StreamError::SinkError(e)) => unreachable!("in-memory graph sink error: {e:?}"),
    }
}

/// Returns the number of triples behind a shared graph handle.
#[must_use]
pub fn triple_count(graph: &SharedGraph) -> usize {
    read(graph).triples().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(suffix: &str) -> IriRef<String> {
        IriRef::new_unchecked(format!("http://example.org/{suffix}"))
    }

    #[test]
    fn copy_into_is_additive() {
        let mut a = FastGraph::new();
        let mut b = FastGraph::new();
        a.insert(iri("s1"), iri("p"), iri("o1")).expect("insert");
        b.insert(iri("s2"), iri("p"), iri("o2")).expect("insert");

        copy_into(&mut a, &b);
        assert_eq!(a.triples().count(), 2);
        // source is untouched
        assert_eq!(b.triples().count(), 1);
    }

    #[test]
    fn copy_into_deduplicates() {
        let mut a = FastGraph::new();
        let mut b = FastGraph::new();
        a.insert(iri("s"), iri("p"), iri("o")).expect("insert");
        b.insert(iri("s"), iri("p"), iri("o")).expect("insert");

        copy_into(&mut a, &b);
        assert_eq!(a.triples().count(), 1);
    }

    #[test]
    fn shared_handles_count_through_the_lock() {
        let mut g = FastGraph::new();
        g.insert(iri("s"), iri("p"), iri("o")).expect("insert");
        let shared = new_shared(g);
        assert_eq!(triple_count(&shared), 1);
    }
}
