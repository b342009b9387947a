use std::{
    fmt,
    ops::{BitAndAssign, BitOrAssign, BitXorAssign, Range, SubAssign},
};

use crate::{
    iter::Ones,
    word::{self, WORD_BITS, Word, bit_mask, word_index, word_spans},
};

/// Growable bit vector packed into 64-bit words.
///
/// Storage grows on demand when a bit beyond the current words is set and
/// shrinks as soon as the highest words become zero, so the last stored word
/// is never zero. That keeps [`len`](BitVec::len) cheap and lets equality
/// compare words directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVec {
    data: Vec<Word>,
}

impl BitVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `n_bits` without changing any observable state.
    pub fn with_capacity(n_bits: usize) -> Self {
        BitVec {
            data: Vec::with_capacity(word::words_for(n_bits)),
        }
    }

    /// Packed storage, lowest bits first. The last word is never zero.
    pub fn as_words(&self) -> &[Word] {
        &self.data
    }

    fn shrink(&mut self) {
        word::trim(&mut self.data);
        debug_assert!(self.data.last().is_none_or(|&w| w != 0));
    }

    pub fn set(&mut self, pos: usize) {
        word::grow_to(&mut self.data, pos);
        self.data[word_index(pos)] |= bit_mask(pos);
    }

    pub fn clear(&mut self, pos: usize) {
        if let Some(w) = self.data.get_mut(word_index(pos)) {
            *w &= !bit_mask(pos);
            self.shrink();
        }
    }

    /// Flips the bit at `pos`. Past the end of storage this is [`set`](BitVec::set).
    pub fn toggle(&mut self, pos: usize) {
        match self.data.get_mut(word_index(pos)) {
            Some(w) => {
                *w ^= bit_mask(pos);
                self.shrink();
            }
            None => self.set(pos),
        }
    }

    pub fn get(&self, pos: usize) -> bool {
        self.data
            .get(word_index(pos))
            .is_some_and(|w| w & bit_mask(pos) != 0)
    }

    pub fn set_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        word::grow_to(&mut self.data, range.end - 1);
        for (w, mask) in word_spans(range.start, range.end) {
            self.data[w] |= mask;
        }
    }

    pub fn clear_range(&mut self, range: Range<usize>) {
        for (w, mask) in word_spans(range.start, range.end) {
            match self.data.get_mut(w) {
                Some(word) => *word &= !mask,
                None => break,
            }
        }
        self.shrink();
    }

    pub fn toggle_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        word::grow_to(&mut self.data, range.end - 1);
        for (w, mask) in word_spans(range.start, range.end) {
            self.data[w] ^= mask;
        }
        self.shrink();
    }

    /// True if every bit in `range` is set. Vacuously true for an empty range.
    pub fn all_range(&self, range: Range<usize>) -> bool {
        word_spans(range.start, range.end)
            .all(|(w, mask)| self.data.get(w).is_some_and(|word| word & mask == mask))
    }

    pub fn any_range(&self, range: Range<usize>) -> bool {
        word_spans(range.start, range.end)
            .any(|(w, mask)| self.data.get(w).is_some_and(|word| word & mask != 0))
    }

    pub fn none_range(&self, range: Range<usize>) -> bool {
        !self.any_range(range)
    }

    /// One past the highest set bit, or 0 when nothing is set.
    pub fn len(&self) -> usize {
        match self.data.last() {
            Some(&last) => (self.data.len() - 1) * WORD_BITS + word::bit_len(last),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
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
        self.len().checked_sub(1)
    }

    /// Smallest set bit strictly after `pos`.
    pub fn next_set(&self, pos: usize) -> Option<usize> {
        word::next_one(&self.data, pos.checked_add(1)?)
    }

    /// Largest set bit strictly before `pos`.
    pub fn prev_set(&self, pos: usize) -> Option<usize> {
        word::prev_one(&self.data, pos)
    }

    pub fn iter(&self) -> Ones<'_> {
        Ones::new(&self.data)
    }

    pub fn union_with(&mut self, other: &BitVec) {
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a |= *b;
        }
        if other.data.len() > self.data.len() {
            let tail = &other.data[self.data.len()..];
            self.data.extend_from_slice(tail);
        }
    }

    pub fn intersect_with(&mut self, other: &BitVec) {
        self.data.truncate(other.data.len());
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a &= *b;
        }
        self.shrink();
    }

    pub fn difference_with(&mut self, other: &BitVec) {
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a &= !*b;
        }
        self.shrink();
    }

    pub fn symmetric_difference_with(&mut self, other: &BitVec) {
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a ^= *b;
        }
        if other.data.len() > self.data.len() {
            let tail = &other.data[self.data.len()..];
            self.data.extend_from_slice(tail);
        }
        self.shrink();
    }

    pub fn is_superset(&self, other: &BitVec) -> bool {
        if other.data.len() > self.data.len() {
            return false;
        }
        self.data.iter().zip(&other.data).all(|(a, b)| b & !a == 0)
    }

    pub fn is_subset(&self, other: &BitVec) -> bool {
        other.is_superset(self)
    }

    /// Flips every bit of the stored words.
    ///
    /// Bits past the last stored word are untouched and still read as clear.
    /// If the highest word was all ones it becomes zero and is dropped, so a
    /// second complement cannot bring it back.
    pub fn complement(&mut self) {
        for w in &mut self.data {
            *w = !*w;
        }
        self.shrink();
    }

    /// Moves every bit `i` down to `i - n`; bits below index 0 are dropped.
    pub fn shift_left(&mut self, n: usize) {
        word::shift_down(&mut self.data, n);
    }

    /// Moves every bit `i` up to `i + n`.
    pub fn shift_right(&mut self, n: usize) {
        word::shift_up(&mut self.data, n);
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        word::render(&self.data, self.len(), f)
    }
}

impl FromIterator<usize> for BitVec {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut vec = BitVec::new();
        vec.extend(iter);
        vec
    }
}

impl Extend<usize> for BitVec {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for pos in iter {
            self.set(pos);
        }
    }
}

impl<'a> IntoIterator for &'a BitVec {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter()
    }
}

impl BitOrAssign<&BitVec> for BitVec {
    fn bitor_assign(&mut self, rhs: &BitVec) {
        self.union_with(rhs);
    }
}

impl BitAndAssign<&BitVec> for BitVec {
    fn bitand_assign(&mut self, rhs: &BitVec) {
        self.intersect_with(rhs);
    }
}

impl BitXorAssign<&BitVec> for BitVec {
    fn bitxor_assign(&mut self, rhs: &BitVec) {
        self.symmetric_difference_with(rhs);
    }
}

impl SubAssign<&BitVec> for BitVec {
    fn sub_assign(&mut self, rhs: &BitVec) {
        self.difference_with(rhs);
    }
}
