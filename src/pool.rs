use std::collections::HashMap;

use crate::{
    error::{GraphError, Result},
    tracing_support::{debug, trace},
    vertex::{Vertex, VertexId, VertexIndex},
};

/// The vertex registry shared by [`Graph`](crate::Graph) and
/// [`WeightedGraph`](crate::WeightedGraph).
///
/// Vertices live in a single vector in insertion order, and a hash index maps
/// each ID to its slot.  Adjacency entries refer to vertices by
/// [`VertexIndex`], so every neighbor handle stays valid for the life of the
/// pool: vertices are never removed.
///
/// Invariants maintained by the insertion methods:
///
/// - every ID appears in exactly one slot, and `index[vertices[i].id] == i`;
/// - every adjacency handle is in bounds;
/// - in an undirected pool, `u` is adjacent to `v` iff `v` is adjacent to `u`,
///   with the same weight on both sides.
#[derive(Clone, Debug)]
pub struct VertexPool<I, W> {
    vertices: Vec<Vertex<I, W>>,
    index: HashMap<I, VertexIndex>,
    directed: bool,
}

impl<I, W> VertexPool<I, W>
where
    I: VertexId,
{
    pub(crate) fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            directed,
        }
    }

    /// Returns true if edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Gets the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the pool holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Looks up the handle of the vertex with the given ID.
    pub fn index_of(&self, id: &I) -> Option<VertexIndex> {
        self.index.get(id).copied()
    }

    /// Like [`Self::index_of`], but reports a missing ID as an error.
    pub fn require(&self, id: &I) -> Result<VertexIndex, I> {
        self.index_of(id)
            .ok_or_else(|| GraphError::UnknownVertex(id.clone()))
    }

    /// Gets the vertex record for a handle issued by this pool.
    ///
    /// Panics if the handle is out of bounds, which can only happen when a
    /// handle from another graph is used.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex<I, W> {
        &self.vertices[index.0]
    }

    /// Gets the ID of the vertex at `index`.
    pub fn id(&self, index: VertexIndex) -> &I {
        self.vertex(index).id()
    }

    /// Iterates over all vertex records in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex<I, W>> + '_ {
        self.vertices.iter()
    }

    /// Iterates over all handles in insertion order.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = VertexIndex> + use<I, W> {
        (0..self.vertices.len()).map(VertexIndex)
    }

    /// Gets the handles of the vertices adjacent to `index`.
    pub fn neighbors(&self, index: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertex(index).neighbor_indices()
    }

    /// Gets the number of edges.  Each undirected edge counts once, as does
    /// an undirected self-loop.
    pub fn num_edges(&self) -> usize {
        if self.directed {
            self.vertices.iter().map(Vertex::degree).sum()
        } else {
            self.indices()
                .map(|u| self.neighbors(u).filter(|&v| u <= v).count())
                .sum()
        }
    }

    pub(crate) fn add_vertex(&mut self, id: I) -> Result<VertexIndex, I> {
        if self.index.contains_key(&id) {
            debug!(?id, "rejecting duplicate vertex");
            return Err(GraphError::DuplicateVertex(id));
        }
        let index = VertexIndex(self.vertices.len());
        trace!(?id, index = index.0, "adding vertex");
        self.index.insert(id.clone(), index);
        self.vertices.push(Vertex::new(id));
        Ok(index)
    }

    /// Adds an edge from `from` to `into`, mirrored when the pool is
    /// undirected.  Both endpoints are resolved before anything is written, so
    /// an error leaves the pool unchanged.
    pub(crate) fn add_edge(&mut self, from: &I, into: &I, weight: W) -> Result<(), I>
    where
        W: Clone,
    {
        let source = self.require(from).inspect_err(|_| {
            debug!(?from, "rejecting edge from unknown vertex");
        })?;
        let target = self.require(into).inspect_err(|_| {
            debug!(?into, "rejecting edge into unknown vertex");
        })?;
        trace!(?from, ?into, directed = self.directed, "adding edge");
        if !self.directed {
            self.vertices[target.0].add_neighbor(source, weight.clone());
        }
        self.vertices[source.0].add_neighbor(target, weight);
        Ok(())
    }

    /// Builds, for every vertex, the list of vertices adjacent to it in
    /// either stored direction, without duplicates.  For an undirected pool
    /// this is just the stored adjacency.
    pub(crate) fn undirected_adjacency(&self) -> Vec<Vec<VertexIndex>> {
        let mut adjacency: Vec<Vec<VertexIndex>> = self
            .vertices
            .iter()
            .map(|v| v.neighbor_indices().collect())
            .collect();
        if self.directed {
            for u in self.indices() {
                for v in self.neighbors(u) {
                    if !self.vertex(v).has_neighbor(u) {
                        adjacency[v.0].push(u);
                    }
                }
            }
        }
        adjacency
    }
}
