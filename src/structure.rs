//! Whole-graph structural queries: bipartiteness, connected components,
//! topological order and cycle detection.

use std::collections::VecDeque;

use bitvec::bitvec;

use crate::{
    error::{GraphError, Result},
    pool::VertexPool,
    tracing_support::{debug, trace},
    vertex::{VertexId, VertexIndex},
};

/// Two-colours every component by breadth-first search, treating edges as
/// undirected.  Returns false at the first edge whose ends share a colour.
pub(crate) fn is_bipartite<I: VertexId, W>(pool: &VertexPool<I, W>) -> bool {
    let adjacency = pool.undirected_adjacency();
    let mut colors: Vec<Option<bool>> = vec![None; pool.len()];

    for start in pool.indices() {
        if colors[start.index()].is_some() {
            continue;
        }
        colors[start.index()] = Some(false);
        let mut queue = VecDeque::from([(start, false)]);
        while let Some((current, color)) = queue.pop_front() {
            for &neighbor in &adjacency[current.index()] {
                match colors[neighbor.index()] {
                    Some(other) if other == color => {
                        debug!(
                            u = current.index(),
                            v = neighbor.index(),
                            "adjacent vertices share a colour"
                        );
                        return false;
                    }
                    Some(_) => {}
                    None => {
                        colors[neighbor.index()] = Some(!color);
                        queue.push_back((neighbor, !color));
                    }
                }
            }
        }
    }
    true
}

/// Partitions all vertices into connected components, following edges in
/// either direction.  Components are ordered by their earliest-inserted
/// vertex; members are in discovery order.
pub(crate) fn connected_components<I: VertexId, W>(
    pool: &VertexPool<I, W>,
) -> Vec<Vec<VertexIndex>> {
    let adjacency = pool.undirected_adjacency();
    let mut visited = bitvec![0; pool.len()];
    let mut components = Vec::new();

    for start in pool.indices() {
        if visited.replace(start.index(), true) {
            continue;
        }
        let mut component = vec![start];
        let mut next = 0;
        // The component vector doubles as the BFS queue.
        while let Some(&current) = component.get(next) {
            next += 1;
            for &neighbor in &adjacency[current.index()] {
                if !visited.replace(neighbor.index(), true) {
                    component.push(neighbor);
                }
            }
        }
        trace!(size = component.len(), "found component");
        components.push(component);
    }
    components
}

/// Orders the vertices so that every edge points forward, using Kahn's
/// algorithm with a FIFO queue seeded in insertion order.
pub(crate) fn topological_sort<I: VertexId, W>(
    pool: &VertexPool<I, W>,
) -> Result<Vec<VertexIndex>, I> {
    let mut in_degree = vec![0usize; pool.len()];
    for u in pool.indices() {
        for v in pool.neighbors(u) {
            in_degree[v.index()] += 1;
        }
    }

    let mut ready: VecDeque<VertexIndex> = pool
        .indices()
        .filter(|v| in_degree[v.index()] == 0)
        .collect();
    let mut sorted = Vec::with_capacity(pool.len());

    while let Some(current) = ready.pop_front() {
        sorted.push(current);
        for neighbor in pool.neighbors(current) {
            in_degree[neighbor.index()] -= 1;
            if in_degree[neighbor.index()] == 0 {
                ready.push_back(neighbor);
            }
        }
    }

    if sorted.len() < pool.len() {
        debug!(
            sorted = sorted.len(),
            total = pool.len(),
            "vertices left with incoming edges"
        );
        return Err(GraphError::CycleDetected);
    }
    Ok(sorted)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// One frame of the explicit depth-first stack.
struct Frame {
    vertex: VertexIndex,
    parent: Option<VertexIndex>,
    next_neighbor: usize,
}

/// Looks for a cycle with an explicit-stack depth-first search, restarted
/// from every vertex not yet reached.  An edge to a vertex still on the
/// active path closes a cycle.  In an undirected graph the mirror of the
/// edge just walked is not a cycle, so the step back to the parent is
/// skipped.
pub(crate) fn contains_cycle<I: VertexId, W>(pool: &VertexPool<I, W>) -> bool {
    let skip_parent = !pool.is_directed();
    let mut marks = vec![Mark::Unvisited; pool.len()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in pool.indices() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::OnPath;
        stack.push(Frame {
            vertex: root,
            parent: None,
            next_neighbor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let current = frame.vertex;
            let parent = frame.parent;
            let Some(neighbor) = pool.vertex(current).neighbor_at(frame.next_neighbor) else {
                marks[current.index()] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.next_neighbor += 1;

            if skip_parent && Some(neighbor) == parent {
                continue;
            }
            match marks[neighbor.index()] {
                Mark::OnPath => {
                    debug!(
                        from = current.index(),
                        to = neighbor.index(),
                        "back edge closes a cycle"
                    );
                    return true;
                }
                Mark::Done => {}
                Mark::Unvisited => {
                    marks[neighbor.index()] = Mark::OnPath;
                    stack.push(Frame {
                        vertex: neighbor,
                        parent: Some(current),
                        next_neighbor: 0,
                    });
                }
            }
        }
    }
    false
}
