use std::iter::FusedIterator;

use crate::word::{WORD_BITS, Word};

/// Iterator over the indices of set bits, ascending from the front and
/// descending from the back.
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [Word],
    front_index: usize,
    front: Word,
    back_index: usize,
    back: Word,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        match words {
            [] => Ones {
                words,
                front_index: 0,
                front: 0,
                back_index: 0,
                back: 0,
            },
            [only] => Ones {
                words,
                front_index: 0,
                front: *only,
                back_index: 0,
                back: 0,
            },
            [first, .., last] => Ones {
                words,
                front_index: 0,
                front: *first,
                back_index: words.len() - 1,
                back: *last,
            },
        }
    }
}

// When the cursors meet, the remaining bits of the shared word are kept in
// `front` and `back` stays zero.
impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.front != 0 {
                let bit = self.front.trailing_zeros() as usize;
                self.front &= self.front - 1;
                return Some(self.front_index * WORD_BITS + bit);
            }
            if self.front_index + 1 >= self.back_index {
                if self.back == 0 {
                    return None;
                }
                self.front_index = self.back_index;
                self.front = std::mem::take(&mut self.back);
                continue;
            }
            self.front_index += 1;
            self.front = self.words[self.front_index];
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.clone().count_remaining();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Ones<'_> {
    fn next_back(&mut self) -> Option<usize> {
        loop {
            if self.back != 0 {
                let bit = WORD_BITS - 1 - self.back.leading_zeros() as usize;
                self.back &= !(1 << bit);
                return Some(self.back_index * WORD_BITS + bit);
            }
            if self.back_index <= self.front_index + 1 {
                if self.front == 0 {
                    return None;
                }
                let bit = WORD_BITS - 1 - self.front.leading_zeros() as usize;
                self.front &= !(1 << bit);
                return Some(self.front_index * WORD_BITS + bit);
            }
            self.back_index -= 1;
            self.back = self.words[self.back_index];
        }
    }
}

impl ExactSizeIterator for Ones<'_> {}

impl FusedIterator for Ones<'_> {}

impl Ones<'_> {
    fn count_remaining(self) -> usize {
        let middle: &[Word] = if self.back_index > self.front_index + 1 {
            &self.words[self.front_index + 1..self.back_index]
        } else {
            &[]
        };
        self.front.count_ones() as usize
            + self.back.count_ones() as usize
            + crate::word::count_ones(middle)
    }
}
