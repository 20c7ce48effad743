#![allow(dead_code)]

use graphwalk::prelude::*;

/// Builds an unweighted graph from a vertex list and an edge list.
pub fn graph<I: VertexId>(directed: bool, ids: &[I], edges: &[(I, I)]) -> Graph<I> {
    let mut graph = Graph::new(directed);
    for id in ids {
        graph.add_vertex(id.clone()).unwrap();
    }
    for (u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

/// Builds a weighted graph from a vertex list and a weighted edge list.
pub fn weighted_graph<I: VertexId, W: Weight>(
    directed: bool,
    ids: &[I],
    edges: &[(I, I, W)],
) -> WeightedGraph<I, W> {
    let mut graph = WeightedGraph::new(directed);
    for id in ids {
        graph.add_vertex(id.clone()).unwrap();
    }
    for (u, v, w) in edges {
        graph.add_edge(u, v, *w).unwrap();
    }
    graph
}

/// Builds a graph over `0..n` from an arbitrary edge list, folding endpoints
/// into range and dropping self-loops.
pub fn graph_from_pairs(directed: bool, n: u8, pairs: &[(u8, u8)]) -> Graph<u8> {
    let n = n.max(1);
    let ids: Vec<u8> = (0..n).collect();
    let edges: Vec<(u8, u8)> = pairs
        .iter()
        .map(|&(u, v)| (u % n, v % n))
        .filter(|(u, v)| u != v)
        .collect();
    graph(directed, &ids, &edges)
}

/// Checks that consecutive IDs in `path` are joined by edges.
pub fn is_valid_path<G: GraphView>(graph: &G, path: &[G::VertexId]) -> bool {
    path.windows(2).all(|pair| {
        graph
            .get_vertex(&pair[0])
            .is_some_and(|vertex| vertex.neighbors().any(|id| *id == pair[1]))
    })
}
