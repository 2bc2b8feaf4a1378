use std::error;
use std::fmt;
use std::result;

/// Errors returned by `RankedTreap<T>` operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key being inserted is already stored.
    DuplicateKey,
    /// A rank outside `[0, len)` was requested.
    IndexOutOfRange { index: usize, len: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key is already present"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "rank {} is out of range for {} keys", index, len)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// A broken structural invariant found by `validate`. Only reachable through a bug.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantViolation {
    KeyOrder,
    HeapOrder,
    SubtreeLength,
}

impl error::Error for InvariantViolation {}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::KeyOrder => write!(f, "keys are not in increasing order"),
            InvariantViolation::HeapOrder => write!(f, "child priority exceeds parent priority"),
            InvariantViolation::SubtreeLength => write!(f, "stale subtree length"),
        }
    }
}
