//! An ordered tree over comparable keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and sometimes has child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key strictly less than its
//!    own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater than or equal to
//!    its own key. Equal keys are allowed and always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a leaf
//! `Node`. This tree does **not** rebalance itself on every mutation. Inserting keys in sorted
//! order gives a tree as tall as it is large. Call [`Tree::rebalance`] to rebuild it at minimum
//! height, `ceil(lg (N + 1))`.
//!
//! ## Storage
//!
//! Nodes live in a generational arena owned by the [`Tree`]. Children and parents are arena
//! handles, so the parent back-reference never owns anything and a handle to a removed node can
//! never resolve to a different node.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Strategy, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [50, 25, 3, 42, 60, 75, 120] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.list_in_order(), vec![3, 25, 42, 50, 60, 75, 120]);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.minimum_with(Strategy::Recursive), Some(&3));
//! assert_eq!(tree.successor(&42), Some(&50));
//!
//! assert!(tree.remove(&50));
//! assert!(!tree.contains(&50));
//! assert_eq!(tree.len(), 6);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod display;
mod error;
mod node;
mod strategy;
#[cfg(test)]
mod test;
mod traverse;
mod tree;
mod util;

pub use error::Error;
pub use strategy::Strategy;
pub use traverse::{InOrder, PostOrder, PreOrder};
pub use tree::Tree;
