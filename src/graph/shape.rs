//! Vertex-id arithmetic for a pyramid with a synthetic source and sink.
//!
//! Every `(row, column) -> id` translation in the crate goes through
//! [`PyramidShape`]; call sites never recompute triangular offsets themselves.
//!
//! Layout for `rows = 3`:
//!
//! ```text
//!          0            source
//!          1            row 1
//!        2   3          row 2
//!      4   5   6        row 3
//!          7            sink
//! ```

use crate::error::{PyramidError, Result};

/// Identifier of a vertex in `[0, vertex_count)`.
pub type VertexId = usize;

/// Returns the triangular number `T(k) = k(k+1)/2`.
#[inline]
pub const fn triangular(k: usize) -> usize {
    k * (k + 1) / 2
}

/// `T(k)`, or `None` if it does not fit in a `usize`.
pub const fn checked_triangular(k: usize) -> Option<usize> {
    // Halve the even factor first; `k / 2 + 1 == (k + 1) / 2` for odd `k`.
    if k % 2 == 0 {
        (k / 2).checked_mul(k + 1)
    } else {
        k.checked_mul(k / 2 + 1)
    }
}

/// Where a vertex sits relative to the pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The synthetic start vertex.
    Source,
    /// A pyramid cell; `row` is 1-indexed, `column` is 0-indexed.
    Cell {
        /// 1-indexed row.
        row: usize,
        /// 0-indexed column, `column < row`.
        column: usize,
    },
    /// The synthetic end vertex.
    Sink,
}

/// Shape of a pyramid with `rows` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidShape {
    rows: usize,
}

impl PyramidShape {
    /// Creates the shape of a pyramid with `rows` rows.
    ///
    /// The caller vouches that `T(rows) + 2` fits in a `usize`; use
    /// [`try_new`](Self::try_new) for counts read from input.
    pub const fn new(rows: usize) -> Self {
        Self { rows }
    }

    /// Creates the shape of a pyramid with `rows` rows, checking that every
    /// vertex id is addressable.
    ///
    /// # Errors
    /// [`PyramidError::TooManyRows`] if `T(rows) + 2` overflows `usize`.
    pub fn try_new(rows: usize) -> Result<Self> {
        match checked_triangular(rows).and_then(|cells| cells.checked_add(2)) {
            Some(_) => Ok(Self { rows }),
            None => Err(PyramidError::TooManyRows { rows }),
        }
    }

    /// Number of rows `N`.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of pyramid cells, `T(N)`.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        triangular(self.rows)
    }

    /// Number of vertices, `T(N) + 2`.
    #[inline]
    pub const fn vertex_count(&self) -> usize {
        self.cell_count() + 2
    }

    /// The synthetic source, always `0`.
    #[inline]
    pub const fn source(&self) -> VertexId {
        0
    }

    /// The synthetic sink, always `vertex_count - 1`.
    #[inline]
    pub const fn sink(&self) -> VertexId {
        self.vertex_count() - 1
    }

    /// Maps a cell to its vertex id: `1 + T(row - 1) + column`.
    ///
    /// # Panics
    /// Debug builds panic if the cell lies outside the pyramid.
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> VertexId {
        debug_assert!(
            (1..=self.rows).contains(&row) && column < row,
            "cell ({}, {}) outside a pyramid of {} rows",
            row,
            column,
            self.rows
        );
        1 + triangular(row - 1) + column
    }

    /// Inverse of [`cell`](Self::cell), also naming the source and sink.
    ///
    /// Returns `None` for ids `>= vertex_count`.
    pub fn locate(&self, vertex: VertexId) -> Option<Location> {
        if vertex == self.source() {
            return Some(Location::Source);
        }
        if vertex == self.sink() {
            return Some(Location::Sink);
        }
        if vertex > self.sink() {
            return None;
        }

        let offset = vertex - 1;
        let mut row = 1;
        while triangular(row) <= offset {
            row += 1;
        }
        Some(Location::Cell {
            row,
            column: offset - triangular(row - 1),
        })
    }

    /// Iterates the cells of the pyramid in row-major, left-to-right order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (1..=self.rows).flat_map(|row| (0..row).map(move |column| (row, column)))
    }
}
