//! Borrowing traversals over a [`Tree`][crate::Tree].
//!
//! Both iterators keep their own stack of pending nodes rather than recursing, so they work on
//! degenerate (chain shaped) trees of any length. Each call to [`Tree::iter`][crate::Tree::iter]
//! or [`Tree::inorder`][crate::Tree::inorder] starts a fresh walk from the root.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// A pre-order walk (node, then left subtree, then right subtree) over the values of a tree.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

/// Manual implementation of `Clone` so iterators over non-`Clone` values can still be cloned.
impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on the stack first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;

        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}

/// An in-order walk (left subtree, then node, then right subtree) over the values of a tree.
/// Values come out in ascending order.
///
/// Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being visited.
    stack: Vec<&'a Node<T>>,
    /// The root of the next subtree to descend into.
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: Vec::new(),
            current: root.as_deref(),
            remaining: len,
        }
    }
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        self.remaining -= 1;

        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}
