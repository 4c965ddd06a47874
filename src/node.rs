//! The link-based building block of a [`Tree`][crate::Tree].
//!
//! Every helper in here walks with an explicit stack (or a bounded `O(lg N)` recursion for the
//! balanced rebuild). Trees built from sorted input degenerate into a chain as long as the input,
//! and following that chain recursively would overflow the stack.

use crate::util::{self, Side};

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A stored value and its two children. A `Node` is owned by exactly one parent slot (or by the
/// tree, for the root).
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// A leaf holding `data`.
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub(crate) fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            tallest = tallest.max(level);
            stack.extend(node.left.as_deref().map(|left| (left, level + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, level + 1)));
        }

        tallest
    }

    /// The right-most (largest) value below `link`.
    pub(crate) fn max(link: &Link<T>) -> Option<&T> {
        let mut current = link.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }

        Some(&current.data)
    }

    /// The left-most (smallest) value below `link`.
    pub(crate) fn min(link: &Link<T>) -> Option<&T> {
        let mut current = link.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }

        Some(&current.data)
    }

    /// Unlinks the right-most node below `link` and returns its value. That node has no right
    /// child, so its parent slot is tied straight to its left child.
    pub(crate) fn take_max(link: &mut Link<T>) -> Option<T> {
        let mut steps = 0;
        let mut current = link.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            steps += 1;
            current = right;
        }

        let slot = util::walk(link, steps, |_| Side::Right);
        let max = slot.take()?;
        let Node { data, left, .. } = *max;
        *slot = left;

        Some(data)
    }

    /// Drops every node below `link` one at a time instead of letting `Box` recurse through the
    /// whole chain.
    pub(crate) fn dismantle(link: Link<T>) {
        let mut stack: Vec<Box<Self>> = link.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Copies the subtree below `link` node for node, so the copy has exactly the same shape.
    ///
    /// Children are built before their parent (post-order), which lets the copy own its nodes
    /// bottom-up without holding several `&mut` into it at once.
    pub(crate) fn clone_link(link: &Link<T>) -> Link<T>
    where
        T: Clone,
    {
        enum Visit<'a, T> {
            Enter(Option<&'a Node<T>>),
            Exit(&'a Node<T>),
        }

        let mut pending = vec![Visit::Enter(link.as_deref())];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(None) => built.push(None),
                Visit::Enter(Some(node)) => {
                    pending.push(Visit::Exit(node));
                    pending.push(Visit::Enter(node.right.as_deref()));
                    pending.push(Visit::Enter(node.left.as_deref()));
                }
                Visit::Exit(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        data: node.data.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        built.pop().flatten()
    }

    /// Builds a minimal-height subtree out of the next `len` values of `values`, which must be
    /// sorted. The value at `len / 2` becomes the root, so an even-length run picks the upper of
    /// its two middle values and the right half ends up one shorter than the left.
    /// `size` is bumped for every node created.
    pub(crate) fn build_balanced(
        values: &mut impl Iterator<Item = T>,
        len: usize,
        size: &mut usize,
    ) -> Link<T> {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build_balanced(values, mid, size);
        let data = values.next()?;
        *size += 1;
        let right = Self::build_balanced(values, len - mid - 1, size);

        Some(Box::new(Node { data, left, right }))
    }

    /// Checks that every value below `link` is ordered against all of its ancestors: no greater
    /// than those it sits left of and no smaller than those it sits right of.
    ///
    /// `add` and `remove` keep equal values to the right of each other, but a rebuilt tree may
    /// split a run of equal values around its middle, so ties are accepted on both sides.
    pub(crate) fn is_ordered(link: &Link<T>) -> bool
    where
        T: Ord,
    {
        // Each entry carries the bounds inherited from its ancestors.
        let mut stack = vec![(link.as_deref(), None::<&T>, None::<&T>)];
        while let Some((node, lower, upper)) = stack.pop() {
            let Some(node) = node else {
                continue;
            };
            if lower.is_some_and(|lower| node.data < *lower)
                || upper.is_some_and(|upper| node.data > *upper)
            {
                return false;
            }
            stack.push((node.left.as_deref(), lower, Some(&node.data)));
            stack.push((node.right.as_deref(), Some(&node.data), upper));
        }

        true
    }
}
