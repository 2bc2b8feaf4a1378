use crate::treap::error::{Error, InvariantViolation, Result};
use crate::treap::node::Node;
use crate::treap::tree;
use rand::{Rng, SeedableRng, XorShiftRng};

const SEED: [u32; 4] = [0x193a_6754, 0xa8a7_d469, 0x9783_0e05, 0x113b_a7bb];

/// An ordered set of unique keys implemented using a treap with subtree lengths.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than or
/// equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys. There is
/// no worst-case bound on the height.
///
/// Every node also stores the length of its subtree, so keys can be addressed by their rank in
/// descending order: rank `0` is the largest key. Inserting a key, getting the key at a rank, and
/// removing the key at a rank all take expected `O(log N)` time.
///
/// # Examples
///
/// ```
/// use rank_treap::treap::RankedTreap;
///
/// let mut treap = RankedTreap::new();
/// assert_eq!(treap.insert(5), Ok(0));
/// assert_eq!(treap.insert(3), Ok(1));
/// assert_eq!(treap.insert(8), Ok(0));
///
/// assert_eq!(treap.get(0), Ok(&8));
/// assert_eq!(treap.get(2), Ok(&3));
///
/// assert_eq!(treap.remove(0), Ok(8));
/// assert_eq!(treap.get(0), Ok(&5));
/// assert_eq!(treap.len(), 2);
/// ```
pub struct RankedTreap<T> {
    tree: tree::Tree<T>,
    rng: XorShiftRng,
}

impl<T> RankedTreap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RankedTreap<T>` whose priorities come from a fixed seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let treap: RankedTreap<u32> = RankedTreap::new();
    /// ```
    pub fn new() -> Self {
        RankedTreap {
            tree: None,
            rng: XorShiftRng::new_unseeded(),
        }
    }

    /// Constructs a new, empty `RankedTreap<T>` whose priorities are generated from `seed`.
    /// Different seeds produce different tree shapes for the same keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let treap: RankedTreap<u32> = RankedTreap::with_seed(42);
    /// ```
    pub fn with_seed(seed: u32) -> Self {
        let mut state = SEED;
        state[0] ^= seed;
        RankedTreap {
            tree: None,
            rng: XorShiftRng::from_seed(state),
        }
    }

    /// Inserts a key into the treap and returns its rank, which is the number of keys in the
    /// treap greater than it.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateKey` if the key is already in the treap. The treap is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::{Error, RankedTreap};
    ///
    /// let mut treap = RankedTreap::new();
    /// assert_eq!(treap.insert(10), Ok(0));
    /// assert_eq!(treap.insert(20), Ok(0));
    /// assert_eq!(treap.insert(15), Ok(1));
    /// assert_eq!(treap.insert(15), Err(Error::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<usize> {
        let RankedTreap {
            ref mut tree,
            ref mut rng,
        } = self;
        if tree::contains(tree, &key) {
            return Err(Error::DuplicateKey);
        }
        Ok(tree::insert(tree, Node::new(key, rng.next_u32())))
    }

    /// Returns an immutable reference to the key with a particular rank.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not less than the number of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::{Error, RankedTreap};
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// treap.insert(2).unwrap();
    /// assert_eq!(treap.get(0), Ok(&2));
    /// assert_eq!(treap.get(1), Ok(&1));
    /// assert_eq!(treap.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        tree::get_by_rank(&self.tree, index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Removes the key with a particular rank from the treap and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not less than the number of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// treap.insert(2).unwrap();
    /// assert_eq!(treap.remove(1), Ok(1));
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let len = self.len();
        tree::remove_by_rank(&mut self.tree, index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the rank of a key, or `None` if the key is not in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// treap.insert(2).unwrap();
    /// assert_eq!(treap.rank(&1), Some(1));
    /// assert_eq!(treap.rank(&3), None);
    /// ```
    pub fn rank(&self, key: &T) -> Option<usize> {
        tree::rank_of(&self.tree, key)
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// assert!(treap.contains(&1));
    /// assert!(!treap.contains(&0));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of keys in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let treap: RankedTreap<u32> = RankedTreap::new();
    /// assert!(treap.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the treap, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// treap.insert(2).unwrap();
    /// treap.clear();
    /// assert_eq!(treap.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// treap.insert(3).unwrap();
    /// assert_eq!(treap.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(1).unwrap();
    /// treap.insert(3).unwrap();
    /// assert_eq!(treap.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the treap. The iterator will yield keys using in-order traversal,
    /// which is the reverse of rank order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_treap::treap::RankedTreap;
    ///
    /// let mut treap = RankedTreap::new();
    /// treap.insert(2).unwrap();
    /// treap.insert(1).unwrap();
    ///
    /// let mut iterator = treap.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RankedTreapIter<'_, T> {
        RankedTreapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Verifies key order, heap order, and subtree lengths of every node. Used by tests.
    pub fn validate(&self) -> ::std::result::Result<(), InvariantViolation> {
        tree::validate(&self.tree)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }
}

impl<T> IntoIterator for RankedTreap<T>
where
    T: Ord,
{
    type IntoIter = RankedTreapIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RankedTreap<T>
where
    T: 'a + Ord,
{
    type IntoIter = RankedTreapIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RankedTreap<T>`.
///
/// This iterator traverses the keys of the treap in-order and yields owned keys.
pub struct RankedTreapIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for RankedTreapIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `RankedTreap<T>`.
///
/// This iterator traverses the keys of the treap in-order and yields immutable references.
pub struct RankedTreapIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for RankedTreapIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref key,
                ref right,
                ..
            } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for RankedTreap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RankedTreap;
    use crate::treap::Error;

    #[test]
    fn test_len_empty() {
        let treap: RankedTreap<u32> = RankedTreap::new();
        assert_eq!(treap.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let treap: RankedTreap<u32> = RankedTreap::new();
        assert!(treap.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut treap = RankedTreap::new();
        assert_eq!(treap.insert(1), Ok(0));
        assert!(treap.contains(&1));
        assert_eq!(treap.get(0), Ok(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut treap = RankedTreap::new();
        treap.insert(1).unwrap();
        treap.insert(2).unwrap();
        assert_eq!(treap.insert(1), Err(Error::DuplicateKey));
        assert_eq!(treap.len(), 2);
        assert_eq!(treap.validate(), Ok(()));
    }

    #[test]
    fn test_get_empty() {
        let treap: RankedTreap<u32> = RankedTreap::new();
        assert_eq!(treap.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_remove() {
        let mut treap = RankedTreap::new();
        treap.insert(1).unwrap();
        assert_eq!(treap.remove(0), Ok(1));
        assert!(treap.is_empty());
        assert_eq!(treap.remove(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut treap = RankedTreap::new();
        treap.insert(1).unwrap();
        treap.insert(2).unwrap();
        assert_eq!(treap.remove(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(treap.len(), 2);
    }

    #[test]
    fn test_scenario_descending_ranks() {
        let mut treap = RankedTreap::new();
        assert_eq!(treap.insert(5), Ok(0));
        assert_eq!(treap.insert(3), Ok(1));
        assert_eq!(treap.insert(8), Ok(0));
        assert_eq!(treap.get(0), Ok(&8));
        assert_eq!(treap.get(1), Ok(&5));
        assert_eq!(treap.get(2), Ok(&3));
        assert_eq!(treap.remove(0), Ok(8));
        assert_eq!(treap.get(0), Ok(&5));
    }

    #[test]
    fn test_scenario_middle_insert() {
        let mut treap = RankedTreap::new();
        assert_eq!(treap.insert(10), Ok(0));
        assert_eq!(treap.insert(20), Ok(0));
        assert_eq!(treap.insert(15), Ok(1));
        let ranked: Vec<u32> = (0..3).map(|index| *treap.get(index).unwrap()).collect();
        assert_eq!(ranked, vec![20, 15, 10]);
    }

    #[test]
    fn test_rank() {
        let mut treap = RankedTreap::new();
        for key in &[4, 9, 1, 7] {
            treap.insert(*key).unwrap();
        }
        assert_eq!(treap.rank(&9), Some(0));
        assert_eq!(treap.rank(&7), Some(1));
        assert_eq!(treap.rank(&4), Some(2));
        assert_eq!(treap.rank(&1), Some(3));
        assert_eq!(treap.rank(&5), None);
    }

    #[test]
    fn test_min_max() {
        let mut treap = RankedTreap::new();
        assert_eq!(treap.min(), None);
        assert_eq!(treap.max(), None);
        treap.insert(4).unwrap();
        treap.insert(9).unwrap();
        treap.insert(1).unwrap();
        assert_eq!(treap.min(), Some(&1));
        assert_eq!(treap.max(), Some(&9));
    }

    #[test]
    fn test_clear() {
        let mut treap = RankedTreap::new();
        treap.insert(1).unwrap();
        treap.clear();
        assert!(treap.is_empty());
        assert_eq!(treap.insert(1), Ok(0));
    }

    #[test]
    fn test_with_seed() {
        let mut first = RankedTreap::with_seed(1);
        let mut second = RankedTreap::with_seed(2);
        for key in 0..100 {
            first.insert(key).unwrap();
            second.insert(key).unwrap();
        }
        assert_eq!(first.validate(), Ok(()));
        assert_eq!(second.validate(), Ok(()));
        assert!(first.iter().eq(second.iter()));
    }

    #[test]
    fn test_into_iter() {
        let mut treap = RankedTreap::new();
        treap.insert(3).unwrap();
        treap.insert(1).unwrap();
        treap.insert(2).unwrap();
        assert_eq!(treap.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iter() {
        let mut treap = RankedTreap::new();
        treap.insert(3).unwrap();
        treap.insert(1).unwrap();
        treap.insert(2).unwrap();
        assert_eq!((&treap).into_iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }
}
