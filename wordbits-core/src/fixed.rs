use std::{fmt, ops::Range};

use crate::{
    error::BitError,
    iter::Ones,
    word::{self, WORD_BITS, Word, bit_mask, word_index, word_spans, words_for},
};

/// Bit vector with a capacity fixed at construction.
///
/// Unlike [`BitVec`](crate::BitVec), `len` is the capacity rather than the
/// position of the highest set bit, and indices at or past it are rejected
/// with a [`BitError`]. Bits at or above the capacity are always clear.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedBitVec {
    data: Vec<Word>,
    len: usize,
}

impl FixedBitVec {
    pub fn new(len: usize) -> Self {
        FixedBitVec {
            data: vec![0; words_for(len)],
            len,
        }
    }

    pub fn as_words(&self) -> &[Word] {
        &self.data
    }

    fn check(&self, pos: usize) -> Result<(), BitError> {
        if pos < self.len {
            Ok(())
        } else {
            Err(BitError::index(pos, self.len))
        }
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), BitError> {
        if range.is_empty() || range.end <= self.len {
            Ok(())
        } else {
            Err(BitError::range(range.start, range.end, self.len))
        }
    }

    /// Resizes storage to `len` bits and clears anything at or above it.
    fn resize(&mut self, len: usize) {
        self.len = len;
        self.data.resize(words_for(len), 0);
        let n_words = self.data.len();
        if let Some(last) = self.data.last_mut() {
            let used = len - (n_words - 1) * WORD_BITS;
            *last &= word::span_mask(0, used);
        }
    }

    /// Sets `pos` without a bounds check; `pos` must be below the capacity.
    pub(crate) fn insert_unchecked(&mut self, pos: usize) {
        debug_assert!(pos < self.len);
        self.data[word_index(pos)] |= bit_mask(pos);
    }

    pub fn set(&mut self, pos: usize) -> Result<(), BitError> {
        self.check(pos)?;
        self.data[word_index(pos)] |= bit_mask(pos);
        Ok(())
    }

    pub fn clear(&mut self, pos: usize) -> Result<(), BitError> {
        self.check(pos)?;
        self.data[word_index(pos)] &= !bit_mask(pos);
        Ok(())
    }

    pub fn toggle(&mut self, pos: usize) -> Result<(), BitError> {
        self.check(pos)?;
        self.data[word_index(pos)] ^= bit_mask(pos);
        Ok(())
    }

    pub fn get(&self, pos: usize) -> Result<bool, BitError> {
        self.check(pos)?;
        Ok(self.data[word_index(pos)] & bit_mask(pos) != 0)
    }

    pub fn set_range(&mut self, range: Range<usize>) -> Result<(), BitError> {
        self.check_range(&range)?;
        for (w, mask) in word_spans(range.start, range.end) {
            self.data[w] |= mask;
        }
        Ok(())
    }

    pub fn clear_range(&mut self, range: Range<usize>) -> Result<(), BitError> {
        self.check_range(&range)?;
        for (w, mask) in word_spans(range.start, range.end) {
            self.data[w] &= !mask;
        }
        Ok(())
    }

    pub fn toggle_range(&mut self, range: Range<usize>) -> Result<(), BitError> {
        self.check_range(&range)?;
        for (w, mask) in word_spans(range.start, range.end) {
            self.data[w] ^= mask;
        }
        Ok(())
    }

    pub fn all_range(&self, range: Range<usize>) -> Result<bool, BitError> {
        self.check_range(&range)?;
        Ok(word_spans(range.start, range.end).all(|(w, mask)| self.data[w] & mask == mask))
    }

    pub fn any_range(&self, range: Range<usize>) -> Result<bool, BitError> {
        self.check_range(&range)?;
        Ok(word_spans(range.start, range.end).any(|(w, mask)| self.data[w] & mask != 0))
    }

    pub fn none_range(&self, range: Range<usize>) -> Result<bool, BitError> {
        self.any_range(range).map(|any| !any)
    }

    /// The capacity, regardless of which bits are set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn any(&self) -> bool {
        self.data.iter().any(|&w| w != 0)
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    pub fn cardinality(&self) -> usize {
        word::count_ones(&self.data)
    }

    pub fn first_set(&self) -> Option<usize> {
        word::next_one(&self.data, 0)
    }

    pub fn last_set(&self) -> Option<usize> {
        word::prev_one(&self.data, self.len)
    }

    pub fn next_set(&self, pos: usize) -> Option<usize> {
        word::next_one(&self.data, pos.checked_add(1)?)
    }

    pub fn prev_set(&self, pos: usize) -> Option<usize> {
        word::prev_one(&self.data, pos)
    }

    pub fn iter(&self) -> Ones<'_> {
        Ones::new(&self.data)
    }

    /// Union; the capacity becomes the larger of the two.
    pub fn union_with(&mut self, other: &FixedBitVec) {
        self.resize(self.len.max(other.len));
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a |= *b;
        }
    }

    /// Intersection; the capacity becomes the smaller of the two.
    pub fn intersect_with(&mut self, other: &FixedBitVec) {
        self.resize(self.len.min(other.len));
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a &= *b;
        }
    }

    pub fn difference_with(&mut self, other: &FixedBitVec) {
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a &= !*b;
        }
    }

    pub fn symmetric_difference_with(&mut self, other: &FixedBitVec) {
        self.resize(self.len.max(other.len));
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a ^= *b;
        }
    }

    /// True if every bit set in `other` is set in `self`. Capacities are ignored.
    pub fn is_superset(&self, other: &FixedBitVec) -> bool {
        other.data.iter().enumerate().all(|(k, b)| {
            let a = self.data.get(k).copied().unwrap_or(0);
            b & !a == 0
        })
    }

    pub fn is_subset(&self, other: &FixedBitVec) -> bool {
        other.is_superset(self)
    }

    /// Flips exactly the bits `0..len`.
    pub fn complement(&mut self) {
        for w in &mut self.data {
            *w = !*w;
        }
        self.resize(self.len);
    }

    /// Moves every bit `i` down to `i - n`, dropping bits that fall below zero.
    pub fn shift_left(&mut self, n: usize) {
        word::shift_down(&mut self.data, n);
        self.resize(self.len);
    }

    /// Moves every bit `i` up to `i + n`, dropping bits pushed past the capacity.
    pub fn shift_right(&mut self, n: usize) {
        if n >= self.len {
            self.data.fill(0);
            return;
        }
        word::shift_up(&mut self.data, n);
        self.data.truncate(words_for(self.len));
        self.resize(self.len);
    }
}

impl fmt::Display for FixedBitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        word::render(&self.data, self.len, f)
    }
}

impl<'a> IntoIterator for &'a FixedBitVec {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter()
    }
}
