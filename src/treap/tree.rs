use crate::treap::error::InvariantViolation;
use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Merges `r_tree` into `l_tree`. Every key in `l_tree` must be less than every key in `r_tree`.
pub fn merge<T>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                l_node.update();
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                r_node.update();
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits `tree` by `key`. Keys less than `key` stay in `tree`, and keys greater than or equal to
/// `key` are returned.
pub fn split<T: Ord>(tree: &mut Tree<T>, key: &T) -> Tree<T> {
    match tree.take() {
        Some(mut node) => {
            if node.key < *key {
                let ret = split(&mut node.right, key);
                node.update();
                *tree = Some(node);
                ret
            } else {
                let res = split(&mut node.left, key);
                *tree = node.left.take();
                node.left = res;
                node.update();
                Some(node)
            }
        },
        None => None,
    }
}

/// Inserts `new_node` and returns the number of keys greater than or equal to its key that were
/// in `tree` beforehand.
pub fn insert<T: Ord>(tree: &mut Tree<T>, new_node: Node<T>) -> usize {
    let right = split(tree, &new_node.key);
    let rank = len(&right);
    merge(tree, Some(Box::new(new_node)));
    merge(tree, right);
    rank
}

/// Removes the key with descending rank `index` by merging the children of its node in place.
pub fn remove_by_rank<T>(tree: &mut Tree<T>, index: usize) -> Option<T> {
    let greater = match *tree {
        Some(ref node) => node.greater_len(),
        None => return None,
    };
    match index.cmp(&greater) {
        Ordering::Less => tree.as_mut().and_then(|node| {
            let ret = remove_by_rank(&mut node.right, index);
            node.update();
            ret
        }),
        Ordering::Greater => tree.as_mut().and_then(|node| {
            let ret = remove_by_rank(&mut node.left, index - greater - 1);
            node.update();
            ret
        }),
        Ordering::Equal => match tree.take() {
            Some(node) => {
                let Node {
                    key,
                    mut left,
                    right,
                    ..
                } = *node;
                merge(&mut left, right);
                *tree = left;
                Some(key)
            },
            None => None,
        },
    }
}

/// Returns the key with descending rank `index`, where rank `0` is the largest key.
pub fn get_by_rank<T>(tree: &Tree<T>, index: usize) -> Option<&T> {
    tree.as_ref().and_then(|node| {
        let greater = node.greater_len();
        match index.cmp(&greater) {
            Ordering::Less => get_by_rank(&node.right, index),
            Ordering::Greater => get_by_rank(&node.left, index - greater - 1),
            Ordering::Equal => Some(&node.key),
        }
    })
}

/// Returns the descending rank of `key`, or `None` if it is not in `tree`.
pub fn rank_of<T: Ord>(tree: &Tree<T>, key: &T) -> Option<usize> {
    let mut curr = tree;
    let mut greater = 0;
    while let Some(ref node) = *curr {
        match key.cmp(&node.key) {
            Ordering::Less => {
                greater += node.greater_len() + 1;
                curr = &node.left;
            },
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(greater + node.greater_len()),
        }
    }
    None
}

pub fn contains<T: Ord>(tree: &Tree<T>, key: &T) -> bool {
    match *tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn len<T>(tree: &Tree<T>) -> usize {
    if let Some(ref node) = tree {
        node.len()
    } else {
        0
    }
}

/// Checks key order, heap order on priorities and subtree lengths of every node in `tree`.
pub fn validate<T: Ord>(tree: &Tree<T>) -> Result<(), InvariantViolation> {
    let mut prev = None;
    validate_subtree(tree, &mut prev).map(|_| ())
}

fn validate_subtree<'a, T: Ord>(
    tree: &'a Tree<T>,
    prev: &mut Option<&'a T>,
) -> Result<usize, InvariantViolation> {
    match *tree {
        Some(ref node) => {
            let children = [&node.left, &node.right];
            for child in children.iter() {
                if let Some(child_node) = child {
                    if child_node.priority > node.priority {
                        return Err(InvariantViolation::HeapOrder);
                    }
                }
            }

            let left_len = validate_subtree(&node.left, prev)?;
            if let Some(prev_key) = *prev {
                if *prev_key >= node.key {
                    return Err(InvariantViolation::KeyOrder);
                }
            }
            *prev = Some(&node.key);
            let right_len = validate_subtree(&node.right, prev)?;

            if node.len != 1 + left_len + right_len {
                return Err(InvariantViolation::SubtreeLength);
            }
            Ok(node.len)
        },
        None => Ok(0),
    }
}
