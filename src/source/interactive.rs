//! Prompting terminal collaborator.

use std::io::{BufRead, Write};

use super::{CellSource, TokenReader};
use crate::error::{PyramidError, Result};

/// Prompts for every value on `writer` and reads answers from `reader`.
///
/// Answers are tokenized, so several values typed on one line satisfy
/// several prompts.
#[derive(Debug)]
pub struct Interactive<R, W> {
    tokens: TokenReader<R>,
    writer: W,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    /// Creates a collaborator over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            writer,
        }
    }

    /// Asks for the number of pyramid rows.
    ///
    /// # Errors
    /// [`PyramidError::MissingRowCount`] when input ends first, or
    /// [`PyramidError::InvalidInteger`] for a non-numeric or negative answer.
    pub fn read_row_count(&mut self) -> Result<usize> {
        write!(self.writer, "Please enter the level count of pyramid: ")?;
        self.writer.flush()?;
        self.tokens
            .next_parsed()?
            .ok_or(PyramidError::MissingRowCount)
    }

    /// Releases the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> CellSource for Interactive<R, W> {
    fn next_cell(&mut self, row: usize, column: usize) -> Result<Option<i64>> {
        write!(self.writer, "Level {}, Number {}: ", row, column + 1)?;
        self.writer.flush()?;
        self.tokens.next_parsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_are_one_indexed() {
        let mut term = Interactive::new(Cursor::new("2\n4\n6 9\n"), Vec::new());
        assert_eq!(term.read_row_count().unwrap(), 2);
        assert_eq!(term.next_cell(1, 0).unwrap(), Some(4));
        assert_eq!(term.next_cell(2, 0).unwrap(), Some(6));
        assert_eq!(term.next_cell(2, 1).unwrap(), Some(9));

        let out = String::from_utf8(term.into_writer()).unwrap();
        assert_eq!(
            out,
            "Please enter the level count of pyramid: \
             Level 1, Number 1: Level 2, Number 1: Level 2, Number 2: "
        );
    }

    #[test]
    fn missing_row_count() {
        let mut term = Interactive::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            term.read_row_count(),
            Err(PyramidError::MissingRowCount)
        ));
    }

    #[test]
    fn negative_row_count_is_invalid() {
        let mut term = Interactive::new(Cursor::new("-3"), Vec::new());
        assert!(matches!(
            term.read_row_count(),
            Err(PyramidError::InvalidInteger { .. })
        ));
    }
}
