use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::tracing_support::init_tracing;

/// Upper bound on the number of vertices in generated graphs.
const MAX_VERTICES: usize = 16;

/// Upper bound on the number of edge insertions in generated graphs.
const MAX_EDGES: usize = 40;

/// A random [`Graph`] over `u8` IDs, directed or undirected, along with the
/// edges that were inserted (duplicates included).
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph<u8>,
    pub edges: Vec<(u8, u8)>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % (MAX_VERTICES + 1);
        let num_edges = usize::arbitrary(g) % (MAX_EDGES + 1);
        let graph = Graph::new(bool::arbitrary(g));
        build_graph(g, graph, num_vertices, num_edges, |_, _| true)
    }
}

/// A random directed acyclic [`Graph`].  Every edge runs from a lower
/// insertion position to a higher one, but the IDs are shuffled so that the
/// insertion order alone doesn't give a topological order by ID.
#[derive(Debug, Clone)]
pub struct ArbDag {
    pub graph: Graph<u8>,
    pub edges: Vec<(u8, u8)>,
}

impl Arbitrary for ArbDag {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % (MAX_VERTICES + 1);
        let num_edges = usize::arbitrary(g) % (MAX_EDGES + 1);
        let ArbGraph { graph, edges } =
            build_graph(g, Graph::new(true), num_vertices, num_edges, |i, j| i < j);
        ArbDag { graph, edges }
    }
}

fn build_graph(
    g: &mut Gen,
    mut graph: Graph<u8>,
    num_vertices: usize,
    num_edges: usize,
    allow: impl Fn(usize, usize) -> bool,
) -> ArbGraph {
    let mut ids: Vec<u8> = (0..num_vertices as u8).collect();
    shuffle(g, &mut ids);
    for &id in &ids {
        graph.add_vertex(id).expect("IDs are distinct");
    }

    let mut edges = Vec::new();
    if num_vertices > 0 {
        for _ in 0..num_edges {
            let i = usize::arbitrary(g) % num_vertices;
            let j = usize::arbitrary(g) % num_vertices;
            if i == j || !allow(i, j) {
                continue;
            }
            graph.add_edge(&ids[i], &ids[j]).expect("endpoints exist");
            edges.push((ids[i], ids[j]));
        }
    }
    ArbGraph { graph, edges }
}

/// A random connected undirected [`WeightedGraph`] with small weights.  A
/// random spanning tree guarantees connectivity; extra edges are added on
/// top of it.
#[derive(Debug, Clone)]
pub struct ArbConnectedWeighted {
    pub graph: WeightedGraph<u8, u32>,
}

impl Arbitrary for ArbConnectedWeighted {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = 1 + usize::arbitrary(g) % MAX_VERTICES;
        let num_extra_edges = usize::arbitrary(g) % (MAX_EDGES + 1);
        let mut graph = WeightedGraph::new(false);
        for id in 0..num_vertices as u8 {
            graph.add_vertex(id).expect("IDs are distinct");
        }
        for v in 1..num_vertices {
            let u = usize::arbitrary(g) % v;
            graph
                .add_edge(&(u as u8), &(v as u8), u32::arbitrary(g) % 10)
                .expect("endpoints exist");
        }
        for _ in 0..num_extra_edges {
            let u = (usize::arbitrary(g) % num_vertices) as u8;
            let v = (usize::arbitrary(g) % num_vertices) as u8;
            if u != v {
                graph
                    .add_edge(&u, &v, u32::arbitrary(g) % 10)
                    .expect("endpoints exist");
            }
        }
        ArbConnectedWeighted { graph }
    }
}

fn shuffle<T>(g: &mut Gen, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        items.swap(i, usize::arbitrary(g) % (i + 1));
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks that consecutive IDs in `path` are joined by edges.
pub fn is_valid_path<G: GraphView>(graph: &G, path: &[G::VertexId]) -> bool {
    path.windows(2).all(|pair| {
        graph
            .get_vertex(&pair[0])
            .is_some_and(|vertex| vertex.neighbors().any(|id| *id == pair[1]))
    })
}

/// Checks the internal consistency of a graph: the ID index agrees with the
/// vertex list, and undirected adjacency is symmetric.
pub fn check_graph_consistency<G: GraphView>(graph: &G) {
    init_tracing();
    assert_eq!(graph.vertex_ids().count(), graph.num_vertices());
    assert!(!has_duplicates(graph.vertex_ids()));
    for vertex in graph.get_vertices() {
        assert_eq!(graph.get_vertex(vertex.id()), Some(vertex));
        assert!(!has_duplicates(vertex.neighbors()));
        if !graph.is_directed() {
            for neighbor in vertex.neighbor_refs() {
                assert!(
                    neighbor.neighbors().any(|id| id == vertex.id()),
                    "{:?} is missing its mirror edge to {:?}",
                    neighbor.id(),
                    vertex.id()
                );
            }
        }
    }
}
