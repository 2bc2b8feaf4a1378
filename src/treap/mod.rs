//! Probabilistic binary search tree where each node also maintains the heap invariant and the
//! length of its subtree.

mod error;
mod node;
mod set;
mod tree;

pub use self::error::{Error, InvariantViolation, Result};
pub use self::set::{RankedTreap, RankedTreapIntoIter, RankedTreapIter};
