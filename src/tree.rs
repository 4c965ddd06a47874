//! A link-based BST that never rebalances on its own. Values are stored exactly in the shape
//! their insertion order produces (equal values go to the right) until
//! [`rebalance`][Tree::rebalance] is called explicitly.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! // Sorted input degenerates into a chain...
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt into a tree of minimal height.
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.successor(&4), Some(&5));
//! assert_eq!(tree.range_find(&2, &4), [&2, &3, &4]);
//!
//! // Removing returns the stored value, or fails if there is nothing to remove.
//! assert_eq!(tree.remove(&4), Ok(4));
//! assert_eq!(tree.remove(&4), Err(Error::NotFound));
//! ```

use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{InOrder, PreOrder};
use crate::node::{Link, Node};
use crate::util::{self, Side};

/// An unbalanced Binary Search Tree of values. Duplicates are kept as separate entries.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Node::dismantle(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`. Use [`collect`][Iterator::collect] or
    /// [`extend`][Extend::extend] to start from a sequence of values instead.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns `true` if the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of stored values, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`size`][Tree::size] matching the standard collections.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Iterates over the stored values in pre-order: each value comes before the values of its
    /// left subtree, which come before those of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &1, &3]);
    /// ```
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root, self.size)
    }

    /// Iterates over the stored values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &2, &3]);
    /// ```
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root, self.size)
    }

    /// Consumes the tree and returns its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();
        self.size = 0;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(mut node) = stack.pop() else {
                break;
            };
            current = node.right.take();
            sorted.push(node.data);
        }

        sorted
    }

    /// Makes the tree empty.
    pub fn clear(&mut self) {
        Node::dismantle(self.root.take());
        self.size = 0;
    }

    /// The number of links on the longest path from the root down to a leaf. A tree with a
    /// single value has a height of 0 and the empty tree has a height of -1.
    pub fn height(&self) -> isize {
        self.root.as_deref().map_or(0, Node::height) as isize - 1
    }

    /// Whether the tree is reasonably close to a perfectly balanced tree of the same size, i.e.
    /// its height is below `2 * log2(size + 1) - 1`. The empty tree has height `-1` against a bound
    /// of `-1`, so it is not balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut chain: Tree<_> = (1..=7).collect();
    /// assert!(!chain.is_balanced());
    ///
    /// chain.rebalance();
    /// assert!(chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let bound = 2.0 * ((self.size + 1) as f64).log2() - 1.0;
        (self.height() as f64) < bound
    }

    /// The smallest stored value.
    pub fn min(&self) -> Option<&T> {
        Node::min(&self.root)
    }

    /// The largest stored value.
    pub fn max(&self) -> Option<&T> {
        Node::max(&self.root)
    }

    /// Whether every value is ordered against its ancestors: no greater than those it sits left
    /// of, no smaller than those it sits right of. Equivalently, [`inorder`][Tree::inorder] is
    /// non-decreasing.
    ///
    /// Only [`replace`][Tree::replace] can break this, when the new value does not belong where
    /// the old one was.
    pub fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        Node::is_ordered(&self.root)
    }

    /// Potentially finds the stored value equal to `item`. If no value matches, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = ["pear", "apple", "plum"].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&"apple"), Some(&"apple"));
    /// assert_eq!(tree.find(&"fig"), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *item == node.data {
                return Some(&node.data);
            }
            current = match Side::toward(item, node) {
                Side::Left => node.left.as_deref(),
                Side::Right => node.right.as_deref(),
            };
        }

        None
    }

    /// Returns `true` if a value equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds `item` as a new leaf. Values equal to one already stored are added too, into the
    /// right subtree of the first equal value met on the way down. The tree is never rebalanced
    /// by this.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match Side::toward(&item, &**node) {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes one stored value equal to `item` and returns it.
    ///
    /// A node with two children takes over the largest value of its left subtree (its in-order
    /// predecessor) and that node is unlinked instead. Otherwise the node's parent link is tied
    /// directly to its only child, if any. The root is handled the same way as any other node.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no stored value equals `item`. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &8]);
    /// assert_eq!(tree.remove(&5), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: Ord,
    {
        let Some(steps) = self.depth_of(item) else {
            debug!("remove: item absent from a tree of {} values", self.size);
            return Err(Error::NotFound);
        };

        let link = util::walk(&mut self.root, steps, |node| Side::toward(item, node));
        let mut node = link.take().expect("`depth_of` found a node at this depth");

        let removed = if node.left.is_some() && node.right.is_some() {
            trace!("remove: two children, promoting the in-order predecessor");
            let predecessor = Node::take_max(&mut node.left).expect("left child exists");
            let removed = mem::replace(&mut node.data, predecessor);
            *link = Some(node);
            removed
        } else {
            trace!("remove: at most one child, relinking the parent");
            let Node { data, left, right } = *node;
            *link = left.or(right);
            data
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored value equal to `item` with `new_item` and returns the old value, or
    /// returns `None` if no value matches.
    ///
    /// The node keeps its place in the tree. It is up to the caller to make sure `new_item`
    /// belongs there (for instance by only changing parts of the value that do not take part in
    /// the ordering); otherwise later lookups may miss values. See [`is_ordered`][Tree::is_ordered].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&20, 25), Some(20));
    /// assert_eq!(tree.replace(&20, 21), None);
    /// assert!(tree.is_ordered());
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            if *item == node.data {
                return Some(mem::replace(&mut node.data, new_item));
            }
            current = match Side::toward(item, node) {
                Side::Left => node.left.as_deref_mut(),
                Side::Right => node.right.as_deref_mut(),
            };
        }

        None
    }

    /// Rebuilds the tree with the same values into a tree of minimal height.
    ///
    /// The middle of the sorted values becomes the root and each half is rebuilt the same way.
    /// A run of equal values may be split by this, leaving some of them in the left subtree of
    /// an equal value; every lookup still finds them.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..1023).collect();
    /// assert_eq!(tree.height(), 1022);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 9);
    /// assert_eq!(tree.size(), 1023);
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = self.height();
        let sorted = mem::take(self).into_sorted_vec();
        let len = sorted.len();

        self.root = Node::build_balanced(&mut sorted.into_iter(), len, &mut self.size);

        debug!(
            "rebalance: {} values, height {} -> {}",
            self.size,
            height_before,
            self.height()
        );
    }

    /// All stored values `v` with `low <= v <= high`, in ascending order. The bounds do not have
    /// to be stored values themselves; if `low > high` nothing is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30, 40].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&20, &30), [&20, &30]);
    /// assert_eq!(tree.range_find(&15, &35), [&20, &30]);
    /// assert!(tree.range_find(&30, &20).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .skip_while(|value| *value < low)
            .take_while(|value| *value <= high)
            .collect()
    }

    /// The smallest stored value strictly greater than `item`, whether or not `item` itself is
    /// stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&6));
    /// assert_eq!(tree.successor(&7), Some(&9));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = if *item < node.data {
                best = Some(&node.data);
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        best
    }

    /// The largest stored value strictly less than `item`, whether or not `item` itself is
    /// stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&9), Some(&6));
    /// assert_eq!(tree.predecessor(&8), Some(&6));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = if node.data < *item {
                best = Some(&node.data);
                node.right.as_deref()
            } else {
                node.left.as_deref()
            };
        }

        best
    }

    /// How many links separate the root from the first node equal to `item`.
    fn depth_of(&self, item: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut depth = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *item == node.data {
                return Some(depth);
            }
            depth += 1;
            current = match Side::toward(item, node) {
                Side::Left => node.left.as_deref(),
                Side::Right => node.right.as_deref(),
            };
        }

        None
    }
}

/// Copies the tree node for node, so the copy has the same shape (and height) as the original.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_link(&self.root),
            size: self.size,
        }
    }
}

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.inorder().eq(other.inorder())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("preorder", &DebugValues(self.iter()))
            .finish()
    }
}

struct DebugValues<I>(I);

impl<I> fmt::Debug for DebugValues<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Draws the tree rotated 90 degrees counterclockwise: the root is on the left edge, right
/// subtrees above their parent and left subtrees below, one value per line with `"| "` per
/// level of depth.
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A reverse in-order walk, so the largest values are printed first.
        let mut stack = Vec::new();
        let mut current = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right.as_deref().map(|right| (right, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.data)?;
            current = node.left.as_deref().map(|left| (left, depth + 1));
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = PreOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
