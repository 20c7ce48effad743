//! In-memory directed and undirected graphs, unweighted ([`Graph`]) or
//! edge-weighted ([`WeightedGraph`]), with breadth-first and depth-first
//! searches, structural queries, and minimum spanning trees.

pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod graph_view;
pub mod pool;
pub mod prelude;
pub mod search;
pub mod vertex;
pub mod vertex_ref;
pub mod weighted_graph;

mod structure;
mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use disjoint_set::DisjointSet;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use graph_view::GraphView;
pub use pool::VertexPool;
pub use search::BfsIterator;
pub use tracing_support::init_tracing;
pub use vertex::{Vertex, VertexId, VertexIndex, WeightedVertex};
pub use vertex_ref::VertexRef;
pub use weighted_graph::{Weight, WeightedEdge, WeightedGraph};
