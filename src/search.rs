//! Hop-count searches over a [`VertexPool`]: breadth-first traversal,
//! shortest paths, distance frontiers and iterative depth-first paths.
//!
//! Everything here works on [`VertexIndex`] handles and bit sets; the
//! [`GraphView`](crate::GraphView) methods translate to and from vertex IDs.

use std::collections::VecDeque;

use bitvec::{bitvec, vec::BitVec};

use crate::{
    pool::VertexPool,
    tracing_support::trace,
    vertex::{VertexId, VertexIndex},
    vertex_ref::VertexRef,
};

/// Breadth-first iterator over the vertices reachable from a start vertex.
///
/// A vertex is marked visited when it is enqueued, so each reachable vertex
/// is yielded exactly once, in FIFO discovery order, starting with the start
/// vertex itself.
pub struct BfsIterator<'g, I, W> {
    pool: &'g VertexPool<I, W>,
    visited: BitVec,
    queue: VecDeque<VertexIndex>,
}

impl<'g, I, W> BfsIterator<'g, I, W>
where
    I: VertexId,
{
    pub(crate) fn new(pool: &'g VertexPool<I, W>, start: VertexIndex) -> Self {
        let mut visited = bitvec![0; pool.len()];
        visited.set(start.index(), true);
        Self {
            pool,
            visited,
            queue: VecDeque::from([start]),
        }
    }
}

impl<'g, I, W> Iterator for BfsIterator<'g, I, W>
where
    I: VertexId,
{
    type Item = VertexRef<'g, I, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for neighbor in self.pool.neighbors(current) {
            if !self.visited.replace(neighbor.index(), true) {
                self.queue.push_back(neighbor);
            }
        }
        Some(VertexRef::new(self.pool, current))
    }
}

/// Finds a hop-minimal path from `start` to `target`.  Among paths of equal
/// length, the one discovered first (following adjacency insertion order)
/// wins.
pub(crate) fn shortest_path<I: VertexId, W>(
    pool: &VertexPool<I, W>,
    start: VertexIndex,
    target: VertexIndex,
) -> Option<Vec<VertexIndex>> {
    if start == target {
        return Some(vec![start]);
    }
    let mut parents: Vec<Option<VertexIndex>> = vec![None; pool.len()];
    let mut visited = bitvec![0; pool.len()];
    visited.set(start.index(), true);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbor in pool.neighbors(current) {
            if visited.replace(neighbor.index(), true) {
                continue;
            }
            parents[neighbor.index()] = Some(current);
            if neighbor == target {
                return Some(walk_back(&parents, target));
            }
            queue.push_back(neighbor);
        }
    }
    None
}

/// Rebuilds a path by following parent links back from `end`.
fn walk_back(parents: &[Option<VertexIndex>], end: VertexIndex) -> Vec<VertexIndex> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(parent) = parents[current.index()] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Finds every vertex whose minimum hop distance from `start` is exactly
/// `distance`, in discovery order.  Distance zero is never reported.
pub(crate) fn vertices_at_distance<I: VertexId, W>(
    pool: &VertexPool<I, W>,
    start: VertexIndex,
    distance: usize,
) -> Vec<VertexIndex> {
    if distance == 0 {
        return Vec::new();
    }
    let mut visited = bitvec![0; pool.len()];
    visited.set(start.index(), true);
    let mut layer = vec![start];

    // Expand one whole layer at a time; layer `d` holds exactly the vertices
    // at distance `d`.
    for _ in 0..distance {
        let mut next = Vec::new();
        for &current in &layer {
            for neighbor in pool.neighbors(current) {
                if !visited.replace(neighbor.index(), true) {
                    next.push(neighbor);
                }
            }
        }
        if next.is_empty() {
            return next;
        }
        layer = next;
    }
    layer
}

/// Finds some path from `start` to `target` with an explicit-stack
/// depth-first search.  The path is not necessarily the shortest one.
///
/// Each stack entry remembers its depth; when an entry is popped the
/// current path is cut back to that depth before the vertex is appended, so
/// the path always runs from `start` to the vertex being expanded.
pub(crate) fn dfs_path<I: VertexId, W>(
    pool: &VertexPool<I, W>,
    start: VertexIndex,
    target: VertexIndex,
) -> Option<Vec<VertexIndex>> {
    if start == target {
        return Some(vec![start]);
    }
    let mut discovered = bitvec![0; pool.len()];
    discovered.set(start.index(), true);
    let mut stack = vec![(start, 0usize)];
    let mut path: Vec<VertexIndex> = Vec::new();

    while let Some((current, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(current);
        trace!(vertex = current.index(), depth, "expanding");
        for neighbor in pool.neighbors(current) {
            if discovered.replace(neighbor.index(), true) {
                continue;
            }
            if neighbor == target {
                path.push(neighbor);
                return Some(path);
            }
            stack.push((neighbor, depth + 1));
        }
    }
    None
}
