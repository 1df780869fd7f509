//! Integer suppliers feeding the pyramid builder.
//!
//! The builder pulls one value per cell through [`CellSource`], in row-major,
//! left-to-right order. Suppliers return `Ok(None)` once they run dry; the
//! builder turns that into [`PyramidError::InputExhausted`](crate::PyramidError)
//! with the position of the missing cell.
//!
//! - [`Values`]: in-memory sequence
//! - [`TokenReader`]: whitespace-separated integers over any `BufRead`
//! - [`Interactive`]: prompting terminal collaborator
//! - [`PyramidFile`]: file collaborator, one pyramid row per line

use crate::error::Result;

mod file;
mod interactive;
mod tokens;

pub use file::PyramidFile;
pub use interactive::Interactive;
pub use tokens::TokenReader;

/// A supplier of pyramid cell values.
pub trait CellSource {
    /// Supplies the value for the cell at `row` (1-indexed) and `column`
    /// (0-indexed), or `None` when no more values are available.
    ///
    /// # Errors
    /// Propagates read and parse failures of the underlying supplier.
    fn next_cell(&mut self, row: usize, column: usize) -> Result<Option<i64>>;
}

impl<S: CellSource + ?Sized> CellSource for &mut S {
    fn next_cell(&mut self, row: usize, column: usize) -> Result<Option<i64>> {
        (**self).next_cell(row, column)
    }
}

/// An in-memory value sequence.
///
/// ```
/// use prime_pyramid::source::{CellSource, Values};
///
/// let mut values = Values::new([4, 6]);
/// assert_eq!(values.next_cell(1, 0).unwrap(), Some(4));
/// assert_eq!(values.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Values {
    inner: std::vec::IntoIter<i64>,
}

impl Values {
    /// Wraps any sequence of integers.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            inner: values.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl CellSource for Values {
    fn next_cell(&mut self, _row: usize, _column: usize) -> Result<Option<i64>> {
        Ok(self.inner.next())
    }
}
