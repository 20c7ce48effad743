use std::fmt::{self, Debug, Display};

use derivative::Derivative;

use crate::{
    pool::VertexPool,
    vertex::{Vertex, VertexId, VertexIndex},
};

/// A borrowed view of one vertex that resolves neighbor handles back into
/// vertex IDs.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""))]
pub struct VertexRef<'g, I, W> {
    pool: &'g VertexPool<I, W>,
    index: VertexIndex,
}

impl<'g, I, W> VertexRef<'g, I, W>
where
    I: VertexId,
{
    pub(crate) fn new(pool: &'g VertexPool<I, W>, index: VertexIndex) -> Self {
        Self { pool, index }
    }

    fn record(&self) -> &'g Vertex<I, W> {
        self.pool.vertex(self.index)
    }

    /// Gets the vertex's ID.
    pub fn id(&self) -> &'g I {
        self.record().id()
    }

    /// Gets the vertex's handle.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Gets the IDs of the neighbors in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = &'g I> + use<'g, I, W> {
        let pool = self.pool;
        self.record()
            .neighbor_indices()
            .map(move |index| pool.id(index))
    }

    /// Gets views of the neighbors in insertion order.
    pub fn neighbor_refs(&self) -> impl Iterator<Item = VertexRef<'g, I, W>> + use<'g, I, W> {
        let pool = self.pool;
        self.record()
            .neighbor_indices()
            .map(move |index| VertexRef::new(pool, index))
    }

    /// Gets `(neighbor ID, edge weight)` pairs in insertion order.
    pub fn neighbors_with_weights(&self) -> impl Iterator<Item = (&'g I, &'g W)> + use<'g, I, W> {
        let pool = self.pool;
        self.record()
            .neighbor_indices_with_weights()
            .map(move |(index, weight)| (pool.id(index), weight))
    }

    /// Gets the weight of the edge to `neighbor`, if there is one.
    pub fn weight_to(&self, neighbor: &I) -> Option<&'g W> {
        let target = self.pool.index_of(neighbor)?;
        self.record()
            .neighbor_indices_with_weights()
            .find_map(|(index, weight)| (index == target).then_some(weight))
    }

    /// Gets the number of neighbors.
    pub fn degree(&self) -> usize {
        self.record().degree()
    }
}

impl<I, W> PartialEq for VertexRef<'_, I, W> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.pool, other.pool) && self.index == other.index
    }
}

impl<I, W> Eq for VertexRef<'_, I, W> {}

impl<I, W> Debug for VertexRef<'_, I, W>
where
    I: VertexId,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", self.id())
            .field("neighbors", &self.neighbors().collect::<Vec<_>>())
            .finish()
    }
}

/// Formats as `<id> adjacent to [<neighbor>, ...]`.
impl<I, W> Display for VertexRef<'_, I, W>
where
    I: VertexId + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} adjacent to [", self.id())?;
        for (i, neighbor) in self.neighbors().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{neighbor}")?;
        }
        f.write_str("]")
    }
}
