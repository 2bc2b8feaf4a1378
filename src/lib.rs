//! An order-statistics treap and the command driver built on it.

pub mod driver;
pub mod options;
pub mod treap;
