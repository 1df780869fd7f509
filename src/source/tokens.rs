//! Whitespace-separated integer tokens over a buffered reader.

use std::collections::VecDeque;
use std::io::BufRead;

use super::CellSource;
use crate::error::{PyramidError, Result};

/// Reads whitespace-separated integers, ignoring line boundaries.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            consumed: 0,
        }
    }

    /// Returns the next raw token, refilling from the reader line by line.
    ///
    /// # Errors
    /// Propagates I/O failures of the underlying reader.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        self.consumed += 1;
        Ok(self.pending.pop_front())
    }

    /// Returns the next token parsed as `T`.
    ///
    /// # Errors
    /// [`PyramidError::InvalidInteger`] if the token does not parse.
    pub fn next_parsed<T: std::str::FromStr>(&mut self) -> Result<Option<T>> {
        match self.next_token()? {
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| PyramidError::invalid(token)),
            None => Ok(None),
        }
    }

    /// Number of tokens handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of tokens left in the stream, draining it.
    ///
    /// # Errors
    /// Propagates I/O failures of the underlying reader.
    pub fn count_remaining(&mut self) -> Result<usize> {
        let mut count = 0;
        while self.next_token()?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}

impl<R: BufRead> CellSource for TokenReader<R> {
    fn next_cell(&mut self, _row: usize, _column: usize) -> Result<Option<i64>> {
        self.next_parsed()
    }
}
