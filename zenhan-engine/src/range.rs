//! Contiguous code point ranges and positional pairing between them

use std::iter::Zip;
use std::ops::RangeInclusive;

use crate::error::{Result, TableError};

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// Pairs produced by [`CharRange::map`]
pub type RangePairs = Zip<RangeInclusive<char>, RangeInclusive<char>>;

/// An inclusive range of chars, from the code point of `start` to the code point of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    start: char,
    end: char,
}

// A valid range always holds at least two chars, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl CharRange {
    /// Create a range covering `start..=end`.
    ///
    /// `end` must be greater than `start`, so a valid range holds at least two chars.
    /// Ranges crossing the surrogate block are rejected as well, since the chars on
    /// either side are not contiguous code points.
    pub fn new(start: char, end: char) -> Result<Self> {
        let (lo, hi) = (start as u32, end as u32);
        if hi <= lo || (lo < SURROGATE_START && hi > SURROGATE_END) {
            return Err(TableError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of chars in the range
    pub fn len(&self) -> usize {
        (self.end as u32 - self.start as u32 + 1) as usize
    }

    /// Iterate over every char in the range, in code point order.
    pub fn iter(&self) -> RangeInclusive<char> {
        self.start..=self.end
    }

    /// Pair this range (the halfwidth side) with `wide` position by position.
    ///
    /// Yields exactly `len()` pairs `(self[i], wide[i])`.
    pub fn map(&self, wide: &CharRange) -> Result<RangePairs> {
        if self.len() != wide.len() {
            return Err(TableError::RangeLengthMismatch {
                narrow: self.len(),
                wide: wide.len(),
            });
        }
        Ok(self.iter().zip(wide.iter()))
    }
}

impl IntoIterator for CharRange {
    type Item = char;
    type IntoIter = RangeInclusive<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
