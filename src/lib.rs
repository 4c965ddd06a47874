//! This crate exposes a link-based Binary Search Tree (BST) that is balanced on request
//! rather than on every insert.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and may have two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. This is where duplicates go.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). Nothing here keeps the height down
//! while values are added: inserting sorted values builds a chain as tall as the tree is
//! large. [`Tree::rebalance`] rebuilds the tree into one of height `O(lg N)` where `N` is
//! the number of values, and [`Tree::is_balanced`] tells whether that is worth doing.
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree (see [`Tree::inorder`]).
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let words = ["kiwi", "apple", "mango", "banana", "cherry"];
//! let mut tree: Tree<_> = words.into_iter().collect();
//!
//! assert!(tree.contains(&"mango"));
//! assert_eq!(tree.predecessor(&"kiwi"), Some(&"cherry"));
//! assert_eq!(tree.range_find(&"b", &"l"), [&"banana", &"cherry", &"kiwi"]);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod node;
pub mod tree;
mod util;


pub use error::{Error, Result};
pub use tree::Tree;
