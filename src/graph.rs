//! The unweighted [`Graph`].

use std::fmt::{self, Display};

use crate::{
    error::Result,
    graph_view::GraphView,
    pool::VertexPool,
    vertex::VertexId,
    vertex_ref::VertexRef,
};

/// A directed or undirected graph whose edges carry no data.
///
/// Vertices are identified by any [`VertexId`] type and are never removed.
/// Adding an edge that already exists has no effect, since at most one edge
/// runs between any ordered pair of vertices.  All queries and traversals
/// come from [`GraphView`].
///
/// ```
/// use graphwalk::prelude::*;
///
/// let mut graph = Graph::new(true);
/// for id in ["A", "B", "C", "D"] {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge(&"A", &"B")?;
/// graph.add_edge(&"B", &"C")?;
/// graph.add_edge(&"C", &"D")?;
///
/// assert_eq!(
///     graph.find_shortest_path(&"A", &"D")?,
///     Some(vec!["A", "B", "C", "D"])
/// );
/// # Ok::<(), graphwalk::GraphError<&str>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<I> {
    pool: VertexPool<I, ()>,
}

impl<I> Graph<I>
where
    I: VertexId,
{
    /// Creates an empty graph.
    pub fn new(is_directed: bool) -> Self {
        Self {
            pool: VertexPool::new(is_directed),
        }
    }

    /// Adds a vertex and returns a view of it.
    ///
    /// Fails with [`GraphError::DuplicateVertex`](crate::GraphError::DuplicateVertex)
    /// if the ID is already taken; the existing vertex and its edges are left
    /// alone.
    pub fn add_vertex(&mut self, id: I) -> Result<VertexRef<'_, I, ()>, I> {
        let index = self.pool.add_vertex(id)?;
        Ok(VertexRef::new(&self.pool, index))
    }

    /// Adds an edge from `from` to `into`; in an undirected graph the edge
    /// also runs from `into` to `from`.
    ///
    /// Fails with [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex)
    /// if either endpoint is missing, without adding anything.
    pub fn add_edge(&mut self, from: &I, into: &I) -> Result<(), I> {
        self.pool.add_edge(from, into, ())
    }
}

impl<I> GraphView for Graph<I>
where
    I: VertexId,
{
    type VertexId = I;
    type Weight = ();

    fn pool(&self) -> &VertexPool<I, ()> {
        &self.pool
    }
}

/// Formats as `Graph with vertices: [<vertex>, ...]`, each vertex formatted
/// as `<id> adjacent to [...]`.
impl<I> Display for Graph<I>
where
    I: VertexId + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vertices(self, f)
    }
}

pub(crate) fn write_vertices<G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: GraphView,
    G::VertexId: Display,
{
    f.write_str("Graph with vertices: [")?;
    for (i, vertex) in graph.get_vertices().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{vertex}")?;
    }
    f.write_str("]")
}
