use std::{convert::Infallible, ops::Range};

use crate::{BitVec, FixedBitVec, error::BitError};

/// Operations shared by the growable and the fixed-capacity bit vectors.
///
/// Index-taking operations are fallible through [`Bits::Error`]: the growable
/// vector never fails, the fixed one rejects indices past its capacity.
pub trait Bits {
    type Error;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn try_set(&mut self, pos: usize) -> Result<(), Self::Error>;
    fn try_clear(&mut self, pos: usize) -> Result<(), Self::Error>;
    fn try_toggle(&mut self, pos: usize) -> Result<(), Self::Error>;
    fn try_get(&self, pos: usize) -> Result<bool, Self::Error>;

    fn try_set_range(&mut self, range: Range<usize>) -> Result<(), Self::Error>;
    fn try_clear_range(&mut self, range: Range<usize>) -> Result<(), Self::Error>;
    fn try_toggle_range(&mut self, range: Range<usize>) -> Result<(), Self::Error>;
    fn try_all_range(&self, range: Range<usize>) -> Result<bool, Self::Error>;
    fn try_any_range(&self, range: Range<usize>) -> Result<bool, Self::Error>;

    fn try_none_range(&self, range: Range<usize>) -> Result<bool, Self::Error> {
        self.try_any_range(range).map(|any| !any)
    }

    fn any(&self) -> bool;

    fn none(&self) -> bool {
        !self.any()
    }

    fn cardinality(&self) -> usize;
    fn first_set(&self) -> Option<usize>;
    fn last_set(&self) -> Option<usize>;
    fn next_set(&self, pos: usize) -> Option<usize>;
    fn prev_set(&self, pos: usize) -> Option<usize>;

    fn union_with(&mut self, other: &Self);
    fn intersect_with(&mut self, other: &Self);
    fn difference_with(&mut self, other: &Self);
    fn symmetric_difference_with(&mut self, other: &Self);
    fn is_superset(&self, other: &Self) -> bool;

    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    fn complement(&mut self);
    fn shift_left(&mut self, n: usize);
    fn shift_right(&mut self, n: usize);
}

// Inherent methods take precedence over trait methods with the same name, so
// the calls below resolve to the concrete implementations.
macro_rules! forward_queries {
    ($ty:ty) => {
        fn len(&self) -> usize {
            <$ty>::len(self)
        }

        fn any(&self) -> bool {
            <$ty>::any(self)
        }

        fn cardinality(&self) -> usize {
            <$ty>::cardinality(self)
        }

        fn first_set(&self) -> Option<usize> {
            <$ty>::first_set(self)
        }

        fn last_set(&self) -> Option<usize> {
            <$ty>::last_set(self)
        }

        fn next_set(&self, pos: usize) -> Option<usize> {
            <$ty>::next_set(self, pos)
        }

        fn prev_set(&self, pos: usize) -> Option<usize> {
            <$ty>::prev_set(self, pos)
        }

        fn union_with(&mut self, other: &Self) {
            <$ty>::union_with(self, other)
        }

        fn intersect_with(&mut self, other: &Self) {
            <$ty>::intersect_with(self, other)
        }

        fn difference_with(&mut self, other: &Self) {
            <$ty>::difference_with(self, other)
        }

        fn symmetric_difference_with(&mut self, other: &Self) {
            <$ty>::symmetric_difference_with(self, other)
        }

        fn is_superset(&self, other: &Self) -> bool {
            <$ty>::is_superset(self, other)
        }

        fn complement(&mut self) {
            <$ty>::complement(self)
        }

        fn shift_left(&mut self, n: usize) {
            <$ty>::shift_left(self, n)
        }

        fn shift_right(&mut self, n: usize) {
            <$ty>::shift_right(self, n)
        }
    };
}

impl Bits for BitVec {
    type Error = Infallible;

    forward_queries!(BitVec);

    fn try_set(&mut self, pos: usize) -> Result<(), Infallible> {
        self.set(pos);
        Ok(())
    }

    fn try_clear(&mut self, pos: usize) -> Result<(), Infallible> {
        self.clear(pos);
        Ok(())
    }

    fn try_toggle(&mut self, pos: usize) -> Result<(), Infallible> {
        self.toggle(pos);
        Ok(())
    }

    fn try_get(&self, pos: usize) -> Result<bool, Infallible> {
        Ok(self.get(pos))
    }

    fn try_set_range(&mut self, range: Range<usize>) -> Result<(), Infallible> {
        self.set_range(range);
        Ok(())
    }

    fn try_clear_range(&mut self, range: Range<usize>) -> Result<(), Infallible> {
        self.clear_range(range);
        Ok(())
    }

    fn try_toggle_range(&mut self, range: Range<usize>) -> Result<(), Infallible> {
        self.toggle_range(range);
        Ok(())
    }

    fn try_all_range(&self, range: Range<usize>) -> Result<bool, Infallible> {
        Ok(self.all_range(range))
    }

    fn try_any_range(&self, range: Range<usize>) -> Result<bool, Infallible> {
        Ok(self.any_range(range))
    }
}

impl Bits for FixedBitVec {
    type Error = BitError;

    forward_queries!(FixedBitVec);

    fn try_set(&mut self, pos: usize) -> Result<(), BitError> {
        self.set(pos)
    }

    fn try_clear(&mut self, pos: usize) -> Result<(), BitError> {
        self.clear(pos)
    }

    fn try_toggle(&mut self, pos: usize) -> Result<(), BitError> {
        self.toggle(pos)
    }

    fn try_get(&self, pos: usize) -> Result<bool, BitError> {
        self.get(pos)
    }

    fn try_set_range(&mut self, range: Range<usize>) -> Result<(), BitError> {
        self.set_range(range)
    }

    fn try_clear_range(&mut self, range: Range<usize>) -> Result<(), BitError> {
        self.clear_range(range)
    }

    fn try_toggle_range(&mut self, range: Range<usize>) -> Result<(), BitError> {
        self.toggle_range(range)
    }

    fn try_all_range(&self, range: Range<usize>) -> Result<bool, BitError> {
        self.all_range(range)
    }

    fn try_any_range(&self, range: Range<usize>) -> Result<bool, BitError> {
        self.any_range(range)
    }
}
