mod common;

use common::{graph, is_valid_path};
use graphwalk::prelude::*;

#[test]
fn test_bfs_traversal_order() {
    graphwalk::init_tracing();
    let g = graph(
        true,
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")],
    );
    let mut visited = Vec::new();
    g.bfs_traversal(&"A", |vertex| visited.push(*vertex.id()))
        .unwrap();
    assert_eq!(visited, vec!["A", "B", "C", "D", "E"]);

    let from_iterator: Vec<_> = g.bfs(&"B").unwrap().map(|v| *v.id()).collect();
    assert_eq!(from_iterator, vec!["B", "D", "E"]);
}

#[test]
fn test_bfs_traversal_in_cycle_visits_each_vertex_once() {
    let g = graph(false, &[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);
    let mut visited = Vec::new();
    g.bfs_traversal(&2, |vertex| visited.push(*vertex.id()))
        .unwrap();
    assert_eq!(visited, vec![2, 1, 3]);
}

#[test]
fn test_shortest_path_on_chain() {
    let g = graph(
        true,
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D")],
    );
    assert_eq!(
        g.find_shortest_path(&"A", &"D").unwrap(),
        Some(vec!["A", "B", "C", "D"])
    );
    assert_eq!(g.find_shortest_path(&"A", &"A").unwrap(), Some(vec!["A"]));
}

#[test]
fn test_shortest_path_prefers_fewer_hops() {
    let g = graph(
        false,
        &[0, 1, 2, 3, 4],
        &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)],
    );
    assert_eq!(g.find_shortest_path(&0, &3).unwrap(), Some(vec![0, 4, 3]));
}

#[test]
fn test_vertices_n_away() {
    let g = graph(
        false,
        &[0, 1, 2, 3, 4, 5],
        &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)],
    );
    assert_eq!(g.find_vertices_n_away(&0, 1).unwrap(), vec![1, 2]);
    assert_eq!(g.find_vertices_n_away(&0, 2).unwrap(), vec![3]);
    assert_eq!(g.find_vertices_n_away(&0, 3).unwrap(), vec![4]);
    assert!(g.find_vertices_n_away(&0, 4).unwrap().is_empty());
    assert!(g.find_vertices_n_away(&5, 1).unwrap().is_empty());
}

#[test]
fn test_dfs_path() {
    let g = graph(
        true,
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("A", "D"), ("D", "E"), ("E", "C")],
    );
    let path = g.find_path_dfs_iter(&"A", &"C").unwrap().unwrap();
    assert_eq!(path.first(), Some(&"A"));
    assert_eq!(path.last(), Some(&"C"));
    assert!(is_valid_path(&g, &path));
    assert_eq!(g.find_path_dfs_iter(&"C", &"A").unwrap(), None);
}

#[test]
fn test_bipartite() {
    let square = graph(false, &[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(square.is_bipartite());
    let triangle = graph(false, &[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
    assert!(!triangle.is_bipartite());
    assert!(Graph::<u8>::new(false).is_bipartite());
}

#[test]
fn test_connected_components() {
    let g = graph(
        false,
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("B", "C"), ("D", "E")],
    );
    assert_eq!(
        g.find_connected_components(),
        vec![vec!["A", "B", "C"], vec!["D", "E"], vec!["F"]]
    );
}

#[test]
fn test_topological_sort() {
    let g = graph(
        true,
        &["shirt", "tie", "jacket", "belt", "trousers"],
        &[
            ("shirt", "tie"),
            ("tie", "jacket"),
            ("shirt", "belt"),
            ("belt", "jacket"),
            ("trousers", "belt"),
        ],
    );
    assert_eq!(
        g.topological_sort().unwrap(),
        vec!["shirt", "trousers", "tie", "belt", "jacket"]
    );
}

#[test]
fn test_directed_cycle() {
    let g = graph(
        true,
        &["A", "B", "C"],
        &[("A", "B"), ("B", "C"), ("C", "A")],
    );
    assert!(g.contains_cycle());
    assert_eq!(g.topological_sort(), Err(GraphError::CycleDetected));
}

#[test]
fn test_undirected_cycle() {
    let path = graph(false, &[0, 1, 2], &[(0, 1), (1, 2)]);
    assert!(!path.contains_cycle());
    let triangle = graph(false, &[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
    assert!(triangle.contains_cycle());
}

#[test]
fn test_unknown_vertices_are_errors() {
    let mut g = graph(true, &["A"], &[]);
    assert_eq!(g.add_edge(&"A", &"B"), Err(GraphError::UnknownVertex("B")));
    assert_eq!(
        g.find_shortest_path(&"B", &"A"),
        Err(GraphError::UnknownVertex("B"))
    );
    assert_eq!(
        g.find_path_dfs_iter(&"A", &"B"),
        Err(GraphError::UnknownVertex("B"))
    );
    assert!(g.bfs(&"B").is_err());
    assert_eq!(
        g.add_vertex("A").unwrap_err().to_string(),
        "duplicate vertex \"A\""
    );
}

#[test]
fn test_display() {
    let g = graph(false, &[1, 2], &[(1, 2)]);
    assert_eq!(
        g.to_string(),
        "Graph with vertices: [1 adjacent to [2], 2 adjacent to [1]]"
    );
    assert_eq!(g.get_vertex(&1).unwrap().to_string(), "1 adjacent to [2]");
}
