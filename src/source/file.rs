//! File collaborator: line `i` holds the `i` values of row `i`.
//!
//! The row count is the file's line count; values are then read as one
//! whitespace-separated token stream, so a row spilling onto the wrong line
//! shifts values rather than failing. A trailing newline does not add a row,
//! but blank lines in between do.

use std::io::Cursor;
use std::path::Path;

use super::{CellSource, TokenReader};
use crate::error::{PyramidError, Result};

/// A pyramid loaded from a text file.
#[derive(Debug)]
pub struct PyramidFile {
    rows: usize,
    tokens: TokenReader<Cursor<String>>,
}

impl PyramidFile {
    /// Opens and reads `path`.
    ///
    /// # Errors
    /// [`PyramidError::Open`] if the file cannot be opened,
    /// [`PyramidError::Io`] if it cannot be read afterwards.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PyramidError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read pyramid file");
        Ok(Self::from_text(text))
    }

    /// Uses in-memory `text` as the file contents.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let rows = text.lines().count();
        Self {
            rows,
            tokens: TokenReader::new(Cursor::new(text)),
        }
    }

    /// Number of rows, inferred from the line count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.tokens.consumed()
    }

    /// Counts the values never consumed, draining the file.
    ///
    /// # Errors
    /// Propagates I/O failures.
    pub fn count_unread(&mut self) -> Result<usize> {
        self.tokens.count_remaining()
    }
}

impl CellSource for PyramidFile {
    fn next_cell(&mut self, row: usize, column: usize) -> Result<Option<i64>> {
        self.tokens.next_cell(row, column)
    }
}
