//! Pyramid Graph Builder.
//!
//! Consumes `T(N)` values in row-major order and wires each non-prime cell to
//! the one or two cells above it. A prime cell gets no incoming edge, so it and
//! every cell that could only be reached through it stay unreachable.
//!
//! ```text
//!   row i-1:   (i-1, j-1)   (i-1, j)
//!                    \        /
//!   row i:            (i, j)          weight -value(i, j)
//! ```
//!
//! Bottom-row cells that are not prime additionally connect to the sink with
//! weight `0`.

use super::dag::PyramidDag;
use super::shape::PyramidShape;
use crate::config::ApexPolicy;
use crate::error::{PyramidError, Result};
use crate::prime::is_prime;
use crate::source::CellSource;

/// Builds a [`PyramidDag`] from a [`CellSource`].
#[derive(Debug, Clone, Copy)]
pub struct PyramidBuilder {
    rows: usize,
    apex: ApexPolicy,
}

impl PyramidBuilder {
    /// A builder for a pyramid with `rows` rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            apex: ApexPolicy::default(),
        }
    }

    /// Sets what happens to the remaining input when the apex is prime.
    #[must_use]
    pub fn apex_policy(mut self, apex: ApexPolicy) -> Self {
        self.apex = apex;
        self
    }

    /// Reads the pyramid from `source` and builds its DAG.
    ///
    /// With a prime apex and [`ApexPolicy::StopReading`], nothing past the
    /// apex is read and the DAG has no edges.
    ///
    /// # Errors
    /// - [`PyramidError::TooManyRows`] if the row count cannot be addressed
    /// - [`PyramidError::InputExhausted`] if `source` runs out early
    /// - [`PyramidError::NegativeCell`] for any negative value read
    /// - any error `source` itself reports
    pub fn build<S: CellSource>(&self, mut source: S) -> Result<PyramidDag> {
        let shape = PyramidShape::try_new(self.rows)?;
        let rows = shape.rows();
        let mut dag = PyramidDag::with_shape(shape);

        if rows == 0 {
            tracing::debug!("empty pyramid, nothing to read");
            return Ok(dag);
        }

        let apex = read_cell(&mut source, &mut dag, 1, 0)?;
        if is_prime(apex) {
            tracing::debug!(apex, policy = ?self.apex, "apex is prime");
            if self.apex == ApexPolicy::DrainRemaining {
                for (row, column) in shape.cells().skip(1) {
                    read_cell(&mut source, &mut dag, row, column)?;
                }
            }
            return Ok(dag);
        }

        let top = shape.cell(1, 0);
        dag.add_edge(shape.source(), top, apex);
        if rows == 1 {
            dag.add_edge(top, shape.sink(), 0);
        }

        for row in 2..=rows {
            for column in 0..row {
                let value = read_cell(&mut source, &mut dag, row, column)?;
                if is_prime(value) {
                    tracing::trace!(row, column, value, "prime cell left unreachable");
                    continue;
                }

                let cell = shape.cell(row, column);
                if column > 0 {
                    dag.add_edge(shape.cell(row - 1, column - 1), cell, value);
                }
                if column + 1 < row {
                    dag.add_edge(shape.cell(row - 1, column), cell, value);
                }
                if row == rows {
                    dag.add_edge(cell, shape.sink(), 0);
                }
            }
        }

        #[cfg(debug_assertions)]
        assert!(dag.validate_invariants(), "builder produced a malformed DAG");

        tracing::debug!(
            rows,
            vertices = dag.vertex_count(),
            edges = dag.edge_count(),
            "built pyramid dag"
        );
        Ok(dag)
    }
}

/// Pulls one value, rejecting exhaustion and negative cells.
fn read_cell<S: CellSource>(
    source: &mut S,
    dag: &mut PyramidDag,
    row: usize,
    column: usize,
) -> Result<i64> {
    let value = source
        .next_cell(row, column)?
        .ok_or_else(|| PyramidError::exhausted(row, column))?;
    if value < 0 {
        return Err(PyramidError::NegativeCell { row, column, value });
    }
    dag.record_value(dag.shape().cell(row, column), value);
    Ok(value)
}
