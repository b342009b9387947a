use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (capacity {len})")]
pub struct BitError {
    pub kind: BitErrorKind,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitErrorKind {
    #[error("index {0} out of bounds")]
    IndexOutOfBounds(usize),
    #[error("range {start}..{end} out of bounds")]
    RangeOutOfBounds { start: usize, end: usize },
}

impl BitError {
    pub fn index(index: usize, len: usize) -> Self {
        BitError {
            kind: BitErrorKind::IndexOutOfBounds(index),
            len,
        }
    }

    pub fn range(start: usize, end: usize, len: usize) -> Self {
        BitError {
            kind: BitErrorKind::RangeOutOfBounds { start, end },
            len,
        }
    }
}
