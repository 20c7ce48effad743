//! [`GraphView`] is the read-only interface shared by [`Graph`](crate::Graph)
//! and [`WeightedGraph`](crate::WeightedGraph).  Implementors only expose
//! their vertex pool; every query and traversal is a default method, so both
//! graph flavours get the same algorithms with the same ordering guarantees.
//!
//! Methods that return vertices or paths return them in a deterministic order
//! derived from vertex and adjacency insertion order unless otherwise noted.
//! Edge weights are ignored by everything in this trait: distances are hop
//! counts.

use crate::{
    error::Result,
    pool::VertexPool,
    search::{self, BfsIterator},
    structure,
    tracing_support::{debug, info_span},
    vertex::{VertexId, VertexIndex},
    vertex_ref::VertexRef,
};

/// A trait for read-only access to a graph's vertices and adjacency.
pub trait GraphView {
    /// The vertex identity type.
    type VertexId: VertexId;
    /// The per-edge payload; `()` for unweighted graphs.
    type Weight;

    /// Gets the registry holding the vertices.
    fn pool(&self) -> &VertexPool<Self::VertexId, Self::Weight>;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        self.pool().is_directed()
    }

    // Vertices

    /// Gets the number of vertices.
    fn num_vertices(&self) -> usize {
        self.pool().len()
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.pool().is_empty()
    }

    /// Gets the number of edges; an undirected edge counts once.
    fn num_edges(&self) -> usize {
        self.pool().num_edges()
    }

    /// Checks whether a vertex with this ID exists.
    fn contains_id(&self, id: &Self::VertexId) -> bool {
        self.pool().index_of(id).is_some()
    }

    /// Looks up a vertex by ID.
    fn get_vertex(&self, id: &Self::VertexId) -> Option<VertexRef<'_, Self::VertexId, Self::Weight>> {
        let pool = self.pool();
        pool.index_of(id).map(|index| VertexRef::new(pool, index))
    }

    /// Gets all vertices in insertion order.
    fn get_vertices(&self) -> impl Iterator<Item = VertexRef<'_, Self::VertexId, Self::Weight>> {
        let pool = self.pool();
        pool.indices().map(move |index| VertexRef::new(pool, index))
    }

    /// Gets all vertex IDs in insertion order.
    fn vertex_ids(&self) -> impl Iterator<Item = &Self::VertexId> {
        self.pool().vertices().map(|vertex| vertex.id())
    }

    // Searches

    /// Returns an iterator that visits every vertex reachable from `start` in
    /// breadth-first order, beginning with `start`.
    fn bfs(&self, start: &Self::VertexId) -> Result<BfsIterator<'_, Self::VertexId, Self::Weight>, Self::VertexId> {
        let pool = self.pool();
        let start = pool.require(start)?;
        Ok(BfsIterator::new(pool, start))
    }

    /// Performs a breadth-first traversal from `start`, calling `visit` once
    /// for each reachable vertex as it is dequeued, before its neighbors are
    /// enqueued.
    fn bfs_traversal<F>(&self, start: &Self::VertexId, mut visit: F) -> Result<(), Self::VertexId>
    where
        F: FnMut(VertexRef<'_, Self::VertexId, Self::Weight>),
    {
        let _span = info_span!("bfs_traversal").entered();
        for vertex in self.bfs(start)? {
            debug!(id = ?vertex.id(), "processing vertex");
            visit(vertex);
        }
        Ok(())
    }

    /// Finds a path from `start` to `target` with the fewest edges, as the
    /// sequence of vertex IDs from `start` to `target` inclusive.  Returns
    /// `Ok(None)` if `target` is unreachable.
    fn find_shortest_path(
        &self,
        start: &Self::VertexId,
        target: &Self::VertexId,
    ) -> Result<Option<Vec<Self::VertexId>>, Self::VertexId> {
        let _span = info_span!("find_shortest_path").entered();
        let pool = self.pool();
        let (start, target) = (pool.require(start)?, pool.require(target)?);
        Ok(search::shortest_path(pool, start, target).map(|path| self.ids_of(&path)))
    }

    /// Finds the vertices whose shortest distance from `start` is exactly
    /// `distance` edges, in discovery order.  The start vertex itself is never
    /// included, so a distance of zero yields nothing.
    fn find_vertices_n_away(
        &self,
        start: &Self::VertexId,
        distance: usize,
    ) -> Result<Vec<Self::VertexId>, Self::VertexId> {
        let _span = info_span!("find_vertices_n_away", distance).entered();
        let pool = self.pool();
        let start = pool.require(start)?;
        Ok(self.ids_of(&search::vertices_at_distance(pool, start, distance)))
    }

    /// Finds some path from `start` to `target` by iterative depth-first
    /// search.  The path is not necessarily the shortest.  Returns `Ok(None)`
    /// if `target` is unreachable.
    fn find_path_dfs_iter(
        &self,
        start: &Self::VertexId,
        target: &Self::VertexId,
    ) -> Result<Option<Vec<Self::VertexId>>, Self::VertexId> {
        let _span = info_span!("find_path_dfs_iter").entered();
        let pool = self.pool();
        let (start, target) = (pool.require(start)?, pool.require(target)?);
        Ok(search::dfs_path(pool, start, target).map(|path| self.ids_of(&path)))
    }

    // Structure

    /// Checks whether the vertices can be split into two sides with every
    /// edge crossing between them.
    ///
    /// Every component is checked, not just the one containing the first
    /// vertex, and edges are treated as undirected, so a directed graph is
    /// judged by its underlying undirected graph.  The empty graph is
    /// bipartite.
    fn is_bipartite(&self) -> bool {
        let _span = info_span!("is_bipartite").entered();
        structure::is_bipartite(self.pool())
    }

    /// Partitions the vertex IDs into connected components, following edges
    /// in either direction regardless of directedness (weak connectivity for
    /// directed graphs).  Every vertex is in exactly one component.
    fn find_connected_components(&self) -> Vec<Vec<Self::VertexId>> {
        let _span = info_span!("find_connected_components").entered();
        structure::connected_components(self.pool())
            .iter()
            .map(|component| self.ids_of(component))
            .collect()
    }

    /// Orders all vertex IDs so that for every edge `u -> v`, `u` comes
    /// before `v`.
    ///
    /// Fails with [`GraphError::CycleDetected`](crate::GraphError::CycleDetected)
    /// if the graph has a cycle.  Every undirected edge is a cycle of length
    /// two, so an undirected graph only sorts if it has no edges.
    fn topological_sort(&self) -> Result<Vec<Self::VertexId>, Self::VertexId> {
        let _span = info_span!("topological_sort").entered();
        let order = structure::topological_sort(self.pool())?;
        Ok(self.ids_of(&order))
    }

    /// Checks whether the graph contains a cycle.
    ///
    /// For a directed graph this is a directed cycle.  For an undirected
    /// graph, walking an edge and straight back along its mirror does not
    /// count; a cycle needs at least three distinct vertices (or a
    /// self-loop).
    fn contains_cycle(&self) -> bool {
        let _span = info_span!("contains_cycle").entered();
        structure::contains_cycle(self.pool())
    }

    /// Maps vertex handles back to their IDs.
    #[doc(hidden)]
    fn ids_of(&self, indices: &[VertexIndex]) -> Vec<Self::VertexId> {
        let pool = self.pool();
        indices.iter().map(|&index| pool.id(index).clone()).collect()
    }
}
