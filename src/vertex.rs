use std::{fmt::Debug, hash::Hash};

/// A trait for types usable as vertex identities.
///
/// This trait has no methods; it bundles the bounds needed to store a label
/// in the vertex registry and report it in errors.  It is implemented for
/// every type meeting those bounds, so `&str`, `String` and the integer
/// types all work out of the box.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T> VertexId for T where T: Eq + Hash + Clone + Debug {}

/// A handle to a vertex: its position in the pool that owns it.  Handles are
/// only meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(pub(crate) usize);

impl VertexIndex {
    /// Gets the zero-based position of the vertex in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One entry of a vertex's adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Adjacent<W> {
    pub(crate) index: VertexIndex,
    pub(crate) weight: W,
}

/// A vertex record: its identity and the vertices reachable from it by one
/// edge.  Neighbors are stored as handles into the owning pool, so a vertex
/// never owns or borrows another vertex.
///
/// Unweighted graphs use `W = ()`.
#[derive(Clone, Debug)]
pub struct Vertex<I, W = ()> {
    id: I,
    adjacent: Vec<Adjacent<W>>,
}

/// A vertex whose adjacency entries carry an edge weight.
pub type WeightedVertex<I, W> = Vertex<I, W>;

impl<I, W> Vertex<I, W> {
    pub(crate) fn new(id: I) -> Self {
        Self {
            id,
            adjacent: Vec::new(),
        }
    }

    /// Gets the vertex's identity.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Registers `neighbor` as reachable from this vertex.  Adding a neighbor
    /// that is already present replaces its weight and keeps its position.
    /// Returns the previous weight, if any.
    pub(crate) fn add_neighbor(&mut self, neighbor: VertexIndex, weight: W) -> Option<W> {
        match self.adjacent.iter_mut().find(|adj| adj.index == neighbor) {
            Some(adj) => Some(std::mem::replace(&mut adj.weight, weight)),
            None => {
                self.adjacent.push(Adjacent {
                    index: neighbor,
                    weight,
                });
                None
            }
        }
    }

    /// Gets the handles of this vertex's neighbors in insertion order.
    pub fn neighbor_indices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.adjacent.iter().map(|adj| adj.index)
    }

    /// Gets the handles of this vertex's neighbors along with the weights of
    /// the edges leading to them, in insertion order.
    pub fn neighbor_indices_with_weights(&self) -> impl Iterator<Item = (VertexIndex, &W)> + '_ {
        self.adjacent.iter().map(|adj| (adj.index, &adj.weight))
    }

    /// Gets the handle of the neighbor at `position` in insertion order.
    pub(crate) fn neighbor_at(&self, position: usize) -> Option<VertexIndex> {
        self.adjacent.get(position).map(|adj| adj.index)
    }

    /// Gets the number of neighbors.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Checks whether `neighbor` is adjacent to this vertex.
    pub fn has_neighbor(&self, neighbor: VertexIndex) -> bool {
        self.adjacent.iter().any(|adj| adj.index == neighbor)
    }
}
