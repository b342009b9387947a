//! Packed word storage shared by the dynamic and fixed bit vectors.
//!
//! Everything here works on raw `[Word]` slices. Bit `i` lives in word
//! `i / WORD_BITS` at offset `i % WORD_BITS`, so word 0 holds the lowest bits.

use tracing::trace;

pub type Word = u64;

pub const WORD_BITS: usize = Word::BITS as usize;

#[inline]
pub fn word_index(bit: usize) -> usize {
    bit / WORD_BITS
}

#[inline]
pub fn bit_offset(bit: usize) -> usize {
    bit % WORD_BITS
}

#[inline]
pub fn bit_mask(bit: usize) -> Word {
    1 << bit_offset(bit)
}

/// Number of words needed to hold `n_bits` bits.
#[inline]
pub fn words_for(n_bits: usize) -> usize {
    n_bits.div_ceil(WORD_BITS)
}

/// Mask with offsets `lo..hi` of a single word set. `hi` may equal `WORD_BITS`.
pub fn span_mask(lo: usize, hi: usize) -> Word {
    debug_assert!(lo <= hi && hi <= WORD_BITS);
    if lo >= hi {
        return 0;
    }
    let upper = if hi == WORD_BITS {
        Word::MAX
    } else {
        (1 << hi) - 1
    };
    upper & (Word::MAX << lo)
}

/// Number of bits up to and including the highest set bit of `word`.
#[inline]
pub fn bit_len(word: Word) -> usize {
    WORD_BITS - word.leading_zeros() as usize
}

/// Splits the bit range `start..end` into `(word index, mask)` pairs.
///
/// Yields nothing for an empty or inverted range.
pub fn word_spans(start: usize, end: usize) -> impl Iterator<Item = (usize, Word)> {
    let words = if start < end {
        word_index(start)..word_index(end - 1) + 1
    } else {
        0..0
    };
    let first = words.start;
    let last = words.end.saturating_sub(1);

    words.map(move |w| {
        let lo = if w == first { bit_offset(start) } else { 0 };
        let hi = if w == last {
            bit_offset(end - 1) + 1
        } else {
            WORD_BITS
        };
        (w, span_mask(lo, hi))
    })
}

/// Grows `words` with zero words until `bit` is addressable.
pub fn grow_to(words: &mut Vec<Word>, bit: usize) {
    let needed = word_index(bit) + 1;
    if needed > words.len() {
        trace!(from = words.len(), to = needed, "grow");
        words.resize(needed, 0);
    }
}

/// Drops trailing zero words. Calling it twice is a no-op the second time.
pub fn trim(words: &mut Vec<Word>) {
    let keep = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    if keep < words.len() {
        trace!(from = words.len(), to = keep, "shrink");
        words.truncate(keep);
    }
}

pub fn count_ones(words: &[Word]) -> usize {
    words.iter().map(|w| w.count_ones() as usize).sum()
}

/// Smallest set bit at or after `from`.
pub fn next_one(words: &[Word], from: usize) -> Option<usize> {
    let mut w = word_index(from);
    let mut cur = *words.get(w)? & (Word::MAX << bit_offset(from));
    loop {
        if cur != 0 {
            return Some(w * WORD_BITS + cur.trailing_zeros() as usize);
        }
        w += 1;
        cur = *words.get(w)?;
    }
}

/// Largest set bit strictly before `before`.
pub fn prev_one(words: &[Word], before: usize) -> Option<usize> {
    if before == 0 || words.is_empty() {
        return None;
    }
    let last = before - 1;
    let (mut w, mut cur) = if word_index(last) < words.len() {
        let w = word_index(last);
        (w, words[w] & span_mask(0, bit_offset(last) + 1))
    } else {
        (words.len() - 1, words[words.len() - 1])
    };
    loop {
        if cur != 0 {
            return Some(w * WORD_BITS + bit_len(cur) - 1);
        }
        if w == 0 {
            return None;
        }
        w -= 1;
        cur = words[w];
    }
}

/// Moves every bit `i` to `i - n`, dropping bits that would land below zero.
///
/// Walks words upward so each source word is read before it is overwritten.
pub fn shift_down(words: &mut Vec<Word>, n: usize) {
    let (skip, off) = (word_index(n), bit_offset(n));
    if skip >= words.len() {
        words.clear();
        return;
    }
    words.drain(..skip);
    if off != 0 {
        for k in 0..words.len() {
            let carry = words.get(k + 1).map_or(0, |&hi| hi << (WORD_BITS - off));
            words[k] = (words[k] >> off) | carry;
        }
    }
    trim(words);
}

/// Moves every bit `i` to `i + n`; the vacated low bits are clear.
///
/// Walks words downward so each source word is read before it is overwritten.
pub fn shift_up(words: &mut Vec<Word>, n: usize) {
    if words.is_empty() {
        return;
    }
    let (skip, off) = (word_index(n), bit_offset(n));
    if off != 0 {
        words.push(0);
        for k in (0..words.len()).rev() {
            let carry = if k == 0 {
                0
            } else {
                words[k - 1] >> (WORD_BITS - off)
            };
            words[k] = (words[k] << off) | carry;
        }
    }
    if skip > 0 {
        words.splice(0..0, std::iter::repeat_n(0, skip));
    }
    trim(words);
}

/// Writes `words[..n_bits]` as `'0'`/`'1'` characters, lowest index first.
pub fn render(words: &[Word], n_bits: usize, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use std::fmt::Write;

    for i in 0..n_bits {
        let set = words
            .get(word_index(i))
            .is_some_and(|w| w & bit_mask(i) != 0);
        f.write_char(if set { '1' } else { '0' })?;
    }
    Ok(())
}
