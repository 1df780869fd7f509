//! Error taxonomy for pyramid construction and resolution.
//!
//! "No path" is deliberately absent: an unreachable sink is an ordinary
//! outcome of resolution and is reported through `Outcome`, never as an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while sourcing, building, or resolving a pyramid.
#[derive(Error, Debug)]
pub enum PyramidError {
    /// The integer supplier ran out before every cell was read.
    #[error("input exhausted at level {row}, number {}", .column + 1)]
    InputExhausted {
        /// 1-indexed row of the missing cell.
        row: usize,
        /// 0-indexed column of the missing cell.
        column: usize,
    },

    /// The interactive collaborator never supplied a level count.
    #[error("no level count supplied")]
    MissingRowCount,

    /// The level count names more cells than a vertex id can address.
    #[error("a pyramid of {rows} levels is too large to address")]
    TooManyRows {
        /// The rejected level count.
        rows: usize,
    },

    /// A token could not be parsed as an integer.
    #[error("invalid integer `{token}`")]
    InvalidInteger {
        /// The offending token as read.
        token: String,
    },

    /// Negative cell values would break the min/max duality of the resolver.
    #[error("negative value {value} at level {row}, number {}", .column + 1)]
    NegativeCell {
        /// 1-indexed row of the cell.
        row: usize,
        /// 0-indexed column of the cell.
        column: usize,
        /// The rejected value.
        value: i64,
    },

    /// A cumulative path sum left the `i64` range.
    #[error("path sum overflowed while relaxing vertex {vertex}")]
    SumOverflow {
        /// Destination vertex of the overflowing relaxation.
        vertex: usize,
    },

    /// The pyramid file could not be opened.
    #[error("can not open input file {}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Any other read failure on the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed solver configuration.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PyramidError {
    /// Creates an exhaustion error for the given cell.
    pub fn exhausted(row: usize, column: usize) -> Self {
        PyramidError::InputExhausted { row, column }
    }

    /// Creates a parse error for `token`.
    pub fn invalid(token: impl Into<String>) -> Self {
        PyramidError::InvalidInteger {
            token: token.into(),
        }
    }

    /// Returns `true` when the error stems from an unopenable input file.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, PyramidError::Open { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PyramidError>;
