//! End-to-end orchestration: Builder → Orderer → Resolver.

use std::fmt;

use serde::Serialize;

use crate::config::SolverConfig;
use crate::error::Result;
use crate::graph::{
    topological_order, MaximumSum, PathCell, PyramidBuilder, PyramidDag, Resolver, VertexId,
};
use crate::source::CellSource;

/// The result of one resolution, ready to print.
///
/// `Display` renders the single result line:
///
/// ```
/// use prime_pyramid::{Solver, source::Values};
///
/// let outcome = Solver::default().solve(2, Values::new([4, 6, 9])).unwrap();
/// assert_eq!(outcome.to_string(), "Maximum Sum: 13");
///
/// let outcome = Solver::default().solve(1, Values::new([5])).unwrap();
/// assert_eq!(outcome.to_string(), "Maximum sum does not exist.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The maximum sum, if any path qualifies.
    pub maximum_sum: Option<i64>,
    /// The reported vertex.
    pub vertex: Option<VertexId>,
    /// Cells along the chosen path, top to bottom.
    pub path: Vec<PathCell>,
}

impl Outcome {
    fn new(best: Option<MaximumSum>, dag: &PyramidDag) -> Self {
        match best {
            Some(best) => Self {
                maximum_sum: Some(best.sum),
                vertex: Some(best.vertex),
                path: best.cells(dag),
            },
            None => Self {
                maximum_sum: None,
                vertex: None,
                path: Vec::new(),
            },
        }
    }

    /// `true` when a maximum sum exists.
    pub fn exists(&self) -> bool {
        self.maximum_sum.is_some()
    }

    /// Cell values along the path joined as `a -> b -> c`.
    pub fn path_display(&self) -> String {
        self.path
            .iter()
            .map(|cell| cell.value.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.maximum_sum {
            Some(sum) => write!(f, "Maximum Sum: {}", sum),
            None => f.write_str("Maximum sum does not exist."),
        }
    }
}

/// Runs the full pipeline under a [`SolverConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// A solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Reads a `rows`-row pyramid from `source` and builds its DAG.
    ///
    /// # Errors
    /// See [`PyramidBuilder::build`].
    pub fn build<S: CellSource>(&self, rows: usize, source: S) -> Result<PyramidDag> {
        PyramidBuilder::new(rows)
            .apex_policy(self.config.apex)
            .build(source)
    }

    /// Orders and resolves an already built DAG.
    ///
    /// A fresh topological order is computed on every call, so resolving the
    /// same DAG twice yields identical outcomes. An edgeless DAG reaches
    /// nothing past the source and is answered without ordering it.
    ///
    /// # Errors
    /// See [`Resolver::resolve`].
    pub fn resolve(&self, dag: &PyramidDag) -> Result<Outcome> {
        if dag.edge_count() == 0 {
            tracing::debug!(vertices = dag.vertex_count(), "no edges, nothing reachable");
            return Ok(Outcome::new(None, dag));
        }

        let order = topological_order(dag);
        let best = Resolver::new(self.config.report).resolve(dag, order)?;
        Ok(Outcome::new(best, dag))
    }

    /// Builds and resolves in one go.
    ///
    /// # Errors
    /// Any build or resolution error.
    pub fn solve<S: CellSource>(&self, rows: usize, source: S) -> Result<Outcome> {
        let span = tracing::debug_span!("solve", rows);
        let _guard = span.enter();

        let dag = self.build(rows, source)?;
        self.resolve(&dag)
    }
}
