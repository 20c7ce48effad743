//! The edge-weighted [`WeightedGraph`] and its minimum spanning tree
//! algorithms.

use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::{self, Debug, Display},
    ops::Add,
};

use crate::{
    disjoint_set::DisjointSet,
    error::Result,
    graph::write_vertices,
    graph_view::GraphView,
    pool::VertexPool,
    tracing_support::{debug, info_span, trace},
    vertex::{VertexId, VertexIndex},
    vertex_ref::VertexRef,
};

/// A trait for edge weight types.
///
/// `W::default()` is taken as the zero weight.  Weights are assumed to be
/// non-negative for the spanning tree algorithms, but this is not checked.
/// Weights that don't compare (such as `NaN`) are ordered as equal.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Default + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Add<Output = T> + Default + Debug {}

fn compare_weights<W: PartialOrd>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// An edge together with its weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedEdge<I, W> {
    pub source: I,
    pub target: I,
    pub weight: W,
}

impl<I, W> WeightedEdge<I, W>
where
    W: Weight,
{
    pub fn new(source: I, target: I, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Sums the weights of a collection of edges.
    pub fn total<'a>(edges: impl IntoIterator<Item = &'a Self>) -> W
    where
        I: 'a,
        W: 'a,
    {
        edges
            .into_iter()
            .fold(W::default(), |total, edge| total + edge.weight)
    }
}

impl<I, W> From<(I, I, W)> for WeightedEdge<I, W> {
    fn from((source, target, weight): (I, I, W)) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A directed or undirected graph whose edges carry a weight of type `W`.
///
/// Construction mirrors [`Graph`](crate::Graph); all queries and traversals
/// from [`GraphView`] are available and ignore weights.  Adding an edge that
/// already exists replaces its weight (on both sides, if undirected).
///
/// ```
/// use graphwalk::prelude::*;
///
/// let mut graph = WeightedGraph::new(false);
/// for id in ["A", "B", "C", "D"] {
///     graph.add_vertex(id)?;
/// }
/// graph.add_edge(&"A", &"B", 1)?;
/// graph.add_edge(&"B", &"C", 2)?;
/// graph.add_edge(&"A", &"C", 2)?;
/// graph.add_edge(&"C", &"D", 3)?;
///
/// let tree = graph.minimum_spanning_tree_kruskal();
/// assert_eq!(WeightedEdge::total(&tree), 6);
/// assert_eq!(graph.minimum_spanning_tree_prim(), 6);
/// # Ok::<(), graphwalk::GraphError<&str>>(())
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph<I, W> {
    pool: VertexPool<I, W>,
}

impl<I, W> WeightedGraph<I, W>
where
    I: VertexId,
    W: Weight,
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
    /// if the ID is already taken.
    pub fn add_vertex(&mut self, id: I) -> Result<VertexRef<'_, I, W>, I> {
        let index = self.pool.add_vertex(id)?;
        Ok(VertexRef::new(&self.pool, index))
    }

    /// Adds an edge from `from` to `into` with the given weight; in an
    /// undirected graph the edge also runs from `into` to `from`.
    ///
    /// Fails with [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex)
    /// if either endpoint is missing, without adding anything.
    pub fn add_edge(&mut self, from: &I, into: &I, weight: W) -> Result<(), I> {
        self.pool.add_edge(from, into, weight)
    }

    /// Gets the weight of the edge from `from` to `into`, if there is one.
    pub fn edge_weight(&self, from: &I, into: &I) -> Option<W> {
        self.get_vertex(from)?.weight_to(into).copied()
    }

    /// Lists every edge exactly once, grouped by source vertex in insertion
    /// order.  An undirected edge is reported once, from whichever endpoint
    /// was added to the graph first.
    pub fn edges(&self) -> Vec<WeightedEdge<I, W>> {
        self.edge_indices()
            .into_iter()
            .map(|(u, v, weight)| self.weighted_edge(u, v, weight))
            .collect()
    }

    /// Sums the weights of all edges, counting each undirected edge once.
    pub fn total_weight(&self) -> W {
        self.edge_indices()
            .into_iter()
            .fold(W::default(), |total, (_, _, weight)| total + weight)
    }

    fn edge_indices(&self) -> Vec<(VertexIndex, VertexIndex, W)> {
        let directed = self.pool.is_directed();
        self.pool
            .indices()
            .flat_map(|u| {
                self.pool
                    .vertex(u)
                    .neighbor_indices_with_weights()
                    .filter(move |&(v, _)| directed || u <= v)
                    .map(move |(v, &weight)| (u, v, weight))
            })
            .collect()
    }

    fn weighted_edge(&self, u: VertexIndex, v: VertexIndex, weight: W) -> WeightedEdge<I, W> {
        WeightedEdge::new(self.pool.id(u).clone(), self.pool.id(v).clone(), weight)
    }

    /// Finds a minimum spanning tree with Kruskal's algorithm and returns its
    /// edges in the order they were accepted.
    ///
    /// Edges are considered once each, lightest first (ties keep the order of
    /// [`Self::edges`]), and accepted when their endpoints are still in
    /// different groups of a [`DisjointSet`].  The search stops after
    /// `num_vertices - 1` edges.  Edge direction is ignored.  For a
    /// disconnected graph the result is a minimum spanning forest with fewer
    /// edges.
    pub fn minimum_spanning_tree_kruskal(&self) -> Vec<WeightedEdge<I, W>> {
        let _span = info_span!("minimum_spanning_tree_kruskal").entered();
        let mut candidates = self.edge_indices();
        candidates.sort_by(|a, b| compare_weights(&a.2, &b.2));

        let wanted = self.num_vertices().saturating_sub(1);
        let mut groups = DisjointSet::new(self.pool.indices());
        let mut tree = Vec::with_capacity(wanted);
        for (u, v, weight) in candidates {
            if tree.len() == wanted {
                break;
            }
            if groups.union(&u, &v) {
                trace!(u = u.index(), v = v.index(), ?weight, "accepting edge");
                tree.push(self.weighted_edge(u, v, weight));
            }
        }
        if tree.len() < wanted {
            debug!(
                edges = tree.len(),
                wanted, "graph is disconnected; returning a spanning forest"
            );
        }
        tree
    }

    /// Finds the total weight of a minimum spanning tree with Prim's
    /// algorithm, growing the tree from the first vertex added.
    ///
    /// The graph must be connected (and, if directed, every vertex reachable
    /// from the first one); otherwise the result covers only the part that
    /// can be reached.  Candidate edges leaving the tree wait in a min-heap,
    /// and an edge is accepted when a [`DisjointSet`] shows that its far end
    /// is not yet joined to the tree.  Returns `W::default()` for a graph with
    /// fewer than two vertices.
    pub fn minimum_spanning_tree_prim(&self) -> W {
        let _span = info_span!("minimum_spanning_tree_prim").entered();
        let mut total = W::default();
        let Some(root) = self.pool.indices().next() else {
            return total;
        };

        let wanted = self.num_vertices() - 1;
        let mut groups = DisjointSet::new(self.pool.indices());
        let mut frontier = Frontier::default();
        let mut accepted = 0;
        frontier.extend_from(&self.pool, root);

        while accepted < wanted
            && let Some(candidate) = frontier.pop()
        {
            if groups.union(&candidate.to, &candidate.from) {
                trace!(
                    u = candidate.from.index(),
                    v = candidate.to.index(),
                    weight = ?candidate.weight,
                    "accepting edge"
                );
                total = total + candidate.weight;
                accepted += 1;
                frontier.extend_from(&self.pool, candidate.to);
            }
        }
        if accepted < wanted {
            debug!(accepted, wanted, "tree does not reach every vertex");
        }
        total
    }
}

/// An edge waiting in Prim's frontier.  Ordered so that `BinaryHeap` pops the
/// lightest edge first, and among equal weights the one pushed first.
struct Candidate<W> {
    weight: W,
    sequence: usize,
    from: VertexIndex,
    to: VertexIndex,
}

impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_weights(&other.weight, &self.weight).then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

struct Frontier<W> {
    heap: BinaryHeap<Candidate<W>>,
    pushed: usize,
}

impl<W> Default for Frontier<W>
where
    W: PartialOrd,
{
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<W> Frontier<W>
where
    W: Weight,
{
    /// Pushes every edge leaving `from`.
    fn extend_from<I: VertexId>(&mut self, pool: &VertexPool<I, W>, from: VertexIndex) {
        for (to, &weight) in pool.vertex(from).neighbor_indices_with_weights() {
            self.heap.push(Candidate {
                weight,
                sequence: self.pushed,
                from,
                to,
            });
            self.pushed += 1;
        }
    }

    fn pop(&mut self) -> Option<Candidate<W>> {
        self.heap.pop()
    }
}

impl<I, W> GraphView for WeightedGraph<I, W>
where
    I: VertexId,
    W: Weight,
{
    type VertexId = I;
    type Weight = W;

    fn pool(&self) -> &VertexPool<I, W> {
        &self.pool
    }
}

/// Formats like [`Graph`](crate::Graph): `Graph with vertices: [...]`.
impl<I, W> Display for WeightedGraph<I, W>
where
    I: VertexId + Display,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vertices(self, f)
    }
}
