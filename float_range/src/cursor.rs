use std::iter::FusedIterator;

use crate::error::{RangeError, Result};
use crate::range::FloatRange;

/// Sequential traversal of a [`FloatRange`].
///
/// The cursor owns a copy of the range, so progress never leaks into the
/// range value itself. A failed advance leaves the position untouched, so once
/// the stop bound is reached the cursor stays exhausted until
/// [`Cursor::reset`].
#[derive(Debug, Clone)]
pub struct Cursor {
    range: FloatRange,
    produced: usize,
}

impl Cursor {
    pub fn new(range: FloatRange) -> Cursor {
        Cursor { range, produced: 0 }
    }

    pub fn range(&self) -> &FloatRange {
        &self.range
    }

    /// The value most recently produced, or `start - step` before the first
    /// advance.
    pub fn current(&self) -> f64 {
        match self.produced.checked_sub(1) {
            Some(k) => self.range.value_at(k),
            None => self.range.start() - self.range.step(),
        }
    }

    /// Moves one step and returns the new value, or
    /// [`RangeError::EndOfSequence`] once the stop bound is reached.
    pub fn advance(&mut self) -> Result<f64> {
        let value = self.peek().ok_or(RangeError::EndOfSequence)?;
        self.produced += 1;
        Ok(value)
    }

    /// The value the next [`Cursor::advance`] would produce.
    pub fn peek(&self) -> Option<f64> {
        let value = self.range.value_at(self.produced);
        self.range.precedes_stop(value).then_some(value)
    }

    pub fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }

    pub fn reset(&mut self) {
        self.produced = 0;
    }
}

impl Iterator for Cursor {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            return (0, Some(0));
        }
        (0, Some(self.range.len().saturating_sub(self.produced)))
    }
}

impl FusedIterator for Cursor {}
