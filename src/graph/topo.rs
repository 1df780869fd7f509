//! Topological Orderer.
//!
//! Depth-first search from every unvisited vertex in id order, emitting
//! vertices in reverse finishing order. An explicit work stack of
//! `(vertex, next_edge)` frames replaces recursion, so deep pyramids cannot
//! overflow the call stack; the finishing order matches the recursive
//! formulation exactly.
//!
//! Every vertex is ordered, reachable or not. The outer loop starts at id `0`,
//! so the whole region reachable from the source is finished first; vertices
//! cut off by prime cells are picked up by later roots and land ahead of the
//! source, where they have nothing to relax.

use super::dag::PyramidDag;
use super::shape::VertexId;

/// A linear order of all vertices in which every edge points forward.
///
/// Produced once per resolution and consumed by value by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<VertexId>,
}

impl TopologicalOrder {
    /// The order as a slice.
    pub fn as_slice(&self) -> &[VertexId] {
        &self.order
    }

    /// Number of ordered vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` if no vertex is ordered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks that the order is a permutation of `dag`'s vertices and that
    /// every edge points forward in it.
    pub fn is_valid_for(&self, dag: &PyramidDag) -> bool {
        let n = dag.vertex_count();
        if self.order.len() != n {
            return false;
        }

        let mut position = vec![usize::MAX; n];
        for (pos, &vertex) in self.order.iter().enumerate() {
            if vertex >= n || position[vertex] != usize::MAX {
                return false;
            }
            position[vertex] = pos;
        }

        dag.edges()
            .iter()
            .all(|e| position[e.from] < position[e.to])
    }
}

impl IntoIterator for TopologicalOrder {
    type Item = VertexId;
    type IntoIter = std::vec::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

/// Computes a topological order of every vertex in `dag`.
///
/// ### Complexity
/// \(O(n + m)\) time, \(O(n)\) extra space.
pub fn topological_order(dag: &PyramidDag) -> TopologicalOrder {
    let n = dag.vertex_count();
    let mut visited = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;
            match dag.neighbor_at(u, next) {
                Some(v) => {
                    frame.1 += 1;
                    if !visited[v] {
                        visited[v] = true;
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                    finished.push(u);
                }
            }
        }
    }

    finished.reverse();
    tracing::trace!(vertices = n, "computed topological order");
    TopologicalOrder { order: finished }
}
