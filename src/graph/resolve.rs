//! Maximum-Sum Resolver.
//!
//! Runs the single-pass DAG shortest-path recurrence over the pre-negated
//! weights, then negates the chosen distance back. Since every cell value is
//! non-negative, the minimum negated cost is exactly the maximum path sum.
//!
//! Distances are `Option<i64>`, with `None` standing for "unreachable". Vertices
//! that are still unreachable when their turn comes relax nothing.

use serde::Serialize;

use super::dag::PyramidDag;
use super::shape::{Location, VertexId};
use super::topo::TopologicalOrder;
use crate::config::ReportPolicy;
use crate::error::{PyramidError, Result};

/// The best path found by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaximumSum {
    /// Sum of the cell values along `path`.
    pub sum: i64,
    /// The reported vertex: the sink, or the deepest reachable cell.
    pub vertex: VertexId,
    /// Vertices from the source to `vertex`, inclusive.
    pub path: Vec<VertexId>,
}

/// One cell on a reported path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathCell {
    /// 1-indexed row.
    pub row: usize,
    /// 0-indexed column.
    pub column: usize,
    /// The cell's value.
    pub value: i64,
}

impl MaximumSum {
    /// The pyramid cells on the path, top to bottom.
    pub fn cells(&self, dag: &PyramidDag) -> Vec<PathCell> {
        let shape = dag.shape();
        self.path
            .iter()
            .filter_map(|&v| match (shape.locate(v), dag.cell_value(v)) {
                (Some(Location::Cell { row, column }), Some(value)) => {
                    Some(PathCell { row, column, value })
                }
                _ => None,
            })
            .collect()
    }
}

/// Resolves the maximum path sum of a [`PyramidDag`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    policy: ReportPolicy,
}

impl Resolver {
    /// A resolver applying `policy` when picking the reported vertex.
    pub fn new(policy: ReportPolicy) -> Self {
        Self { policy }
    }

    /// The active report policy.
    pub fn policy(&self) -> ReportPolicy {
        self.policy
    }

    /// Relaxes every edge in topological order and reports the best sum.
    ///
    /// Returns `Ok(None)` when no vertex past the source qualifies under the
    /// report policy; that is an ordinary outcome, not an error.
    ///
    /// # Errors
    /// [`PyramidError::SumOverflow`] if a cumulative sum leaves `i64`.
    pub fn resolve(&self, dag: &PyramidDag, order: TopologicalOrder) -> Result<Option<MaximumSum>> {
        let n = dag.vertex_count();
        let mut dist: Vec<Option<i64>> = vec![None; n];
        let mut pred: Vec<Option<VertexId>> = vec![None; n];
        dist[dag.source()] = Some(0);

        for u in order {
            let Some(du) = dist[u] else { continue };
            for edge in dag.out_edges(u) {
                let cand = du
                    .checked_add(edge.weight)
                    .ok_or(PyramidError::SumOverflow { vertex: edge.to })?;
                if dist[edge.to].map_or(true, |dv| dv > cand) {
                    dist[edge.to] = Some(cand);
                    pred[edge.to] = Some(u);
                }
            }
        }

        let chosen = match self.policy {
            ReportPolicy::BestReachableSuffix => (1..n).rev().find(|&v| dist[v].is_some()),
            ReportPolicy::StrictSink => Some(dag.sink()).filter(|&v| dist[v].is_some()),
        };

        let Some(vertex) = chosen else {
            tracing::debug!(policy = ?self.policy, "maximum sum does not exist");
            return Ok(None);
        };

        let cost = dist[vertex].unwrap_or_default();
        let sum = cost
            .checked_neg()
            .ok_or(PyramidError::SumOverflow { vertex })?;

        let mut path = vec![vertex];
        let mut cur = vertex;
        while let Some(p) = pred[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();

        tracing::debug!(vertex, sum, hops = path.len() - 1, "resolved maximum sum");
        Ok(Some(MaximumSum { sum, vertex, path }))
    }
}
