pub use crate::disjoint_set::DisjointSet;
pub use crate::error::GraphError;
pub use crate::graph::Graph;
pub use crate::graph_view::GraphView;
pub use crate::vertex::{VertexId, VertexIndex};
pub use crate::vertex_ref::VertexRef;
pub use crate::weighted_graph::{Weight, WeightedEdge, WeightedGraph};
