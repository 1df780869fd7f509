//! The pyramid DAG: an edge arena plus one edge-index list per vertex.
//!
//! Edges are appended once by the builder and never mutated or shared
//! afterwards. Weights are stored negated, so the resolver can run the
//! ordinary minimum-cost DAG recurrence and flip the sign at the end.
//!
//! Per-vertex storage grows with the cells actually read, never with the
//! declared row count, so a level count whose values never arrive costs
//! nothing up front.
//!
//! Acyclicity holds by construction (every edge goes one row down, or from the
//! source to row 1, or from row `N` to the sink) and is only checked in debug
//! builds via `PyramidDag::validate_invariants`.

use super::shape::{PyramidShape, VertexId};
#[cfg(debug_assertions)]
use super::shape::Location;

/// A directed edge owned by its source vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Tail vertex.
    pub from: VertexId,
    /// Head vertex.
    pub to: VertexId,
    /// Negated cell value of `to`, or `0` for sink edges.
    pub weight: i64,
}

/// A pyramid mapped to a DAG with a synthetic source and sink.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `out_edges` | \(O(\deg u)\) | Walks the vertex's edge-index list |
/// | `has_edge` | \(O(\deg u)\) | Out-degree is at most 2 |
/// | `in_degree` | \(O(m)\) | No transpose is kept |
#[derive(Debug, Clone)]
pub struct PyramidDag {
    shape: PyramidShape,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
    values: Vec<Option<i64>>,
}

impl PyramidDag {
    /// An edgeless DAG over the `T(N) + 2` vertices of `shape`.
    pub(crate) fn with_shape(shape: PyramidShape) -> Self {
        Self {
            shape,
            edges: Vec::new(),
            outgoing: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Adds `from -> to` carrying `-value`.
    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId, value: i64) {
        debug_assert!(
            from < self.vertex_count() && to < self.vertex_count(),
            "edge {} -> {} out of bounds",
            from,
            to
        );
        if self.outgoing.len() <= from {
            self.outgoing.resize_with(from + 1, Vec::new);
        }
        let idx = self.edges.len();
        self.edges.push(Edge {
            from,
            to,
            weight: -value,
        });
        self.outgoing[from].push(idx);
    }

    /// Remembers the value read for a cell vertex.
    pub(crate) fn record_value(&mut self, vertex: VertexId, value: i64) {
        if self.values.len() <= vertex {
            self.values.resize(vertex + 1, None);
        }
        self.values[vertex] = Some(value);
    }

    fn edge_indices(&self, vertex: VertexId) -> &[usize] {
        self.outgoing
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The pyramid shape this DAG was allocated for.
    pub fn shape(&self) -> PyramidShape {
        self.shape
    }

    /// Number of vertices, `T(N) + 2`.
    pub fn vertex_count(&self) -> usize {
        self.shape.vertex_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The synthetic source.
    pub fn source(&self) -> VertexId {
        self.shape.source()
    }

    /// The synthetic sink.
    pub fn sink(&self) -> VertexId {
        self.shape.sink()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_indices(vertex)
            .iter()
            .map(move |&idx| &self.edges[idx])
    }

    /// Out-neighbors of `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(vertex).map(|e| e.to)
    }

    /// The `index`-th out-neighbor of `vertex`, if any.
    pub(crate) fn neighbor_at(&self, vertex: VertexId, index: usize) -> Option<VertexId> {
        self.edge_indices(vertex)
            .get(index)
            .map(|&idx| self.edges[idx].to)
    }

    /// Out-degree.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edge_indices(vertex).len()
    }

    /// In-degree.
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|e| e.to == vertex).count()
    }

    /// Edge membership test.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).any(|v| v == to)
    }

    /// The value read for a cell, or `None` for the source, the sink, and
    /// cells never read.
    pub fn cell_value(&self, vertex: VertexId) -> Option<i64> {
        self.values.get(vertex).copied().flatten()
    }

    /// Validates the structural invariants of the pyramid DAG.
    ///
    /// Checks that:
    /// 1. Every edge endpoint is in bounds
    /// 2. Edges leave the source only towards row 1
    /// 3. Cell edges go exactly one row down to an adjacent column
    /// 4. Only bottom-row cells reach the sink, with weight `0`
    /// 5. Every non-sink edge carries the negated value of its head cell
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertex_count();
        if self.outgoing.len() > n || self.values.len() > n {
            return false;
        }

        for edge in &self.edges {
            if edge.from >= n || edge.to >= n {
                return false;
            }
            let from = self.shape.locate(edge.from);
            let to = self.shape.locate(edge.to);
            let shaped = match (from, to) {
                (Some(Location::Source), Some(Location::Cell { row: 1, column: 0 })) => true,
                (
                    Some(Location::Cell { row: r0, column: c0 }),
                    Some(Location::Cell { row: r1, column: c1 }),
                ) => r1 == r0 + 1 && (c1 == c0 || c1 == c0 + 1),
                (Some(Location::Cell { row, .. }), Some(Location::Sink)) => {
                    row == self.shape.rows() && edge.weight == 0
                }
                _ => false,
            };
            if !shaped {
                return false;
            }
            if edge.to != self.sink() && Some(-edge.weight) != self.cell_value(edge.to) {
                return false;
            }
        }

        true
    }
}
