use crate::treap::tree;

/// A struct representing an internal node of an order-statistics treap.
pub struct Node<T> {
    pub key: T,
    pub priority: u32,
    pub len: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T, priority: u32) -> Self {
        Node {
            key,
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Recomputes the subtree length from the children. Must be called after any child link of
    /// this node is rewritten.
    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = 1 + tree::len(left) + tree::len(right);
    }

    /// Number of keys in the subtree that are greater than this node's key.
    pub fn greater_len(&self) -> usize {
        tree::len(&self.right)
    }
}
