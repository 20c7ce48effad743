use std::fmt::Debug;

/// Errors reported by graph construction and queries.  A call that fails
/// leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<I: Debug> {
    /// An operation referenced a vertex ID that is not in the graph.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(I),
    /// A vertex with this ID already exists.
    #[error("duplicate vertex {0:?}")]
    DuplicateVertex(I),
    /// A topological ordering was requested for a graph with a cycle.
    #[error("graph contains a cycle")]
    CycleDetected,
}

pub type Result<T, I> = std::result::Result<T, GraphError<I>>;
