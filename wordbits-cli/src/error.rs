use std::convert::Infallible;

use thiserror::Error;
use wordbits_core::BitError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub kind: ScriptErrorKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument `{0}`")]
    TrailingArgument(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("invalid range `{0}`")]
    InvalidRange(String),
    #[error("undefined vector `{0}`")]
    UndefinedVector(String),
    #[error("cannot combine a growable vector with a fixed one")]
    VariantMismatch,
    #[error(transparent)]
    Bit(#[from] BitError),
}

impl From<Infallible> for ScriptErrorKind {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl ScriptErrorKind {
    pub fn at(self, line: usize) -> ScriptError {
        ScriptError { kind: self, line }
    }
}
