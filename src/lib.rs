//! This crate exposes a comparator-driven Binary Search Tree with an optional AVL
//! balancing policy.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value that orders before its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value that orders after its own value.
//!
//! Here "orders before" is decided by a comparator handed to the tree when it
//! is built, so the same values can be kept in different trees under different
//! orderings (e.g. contacts by name in one tree and by phone in another).
//!
//! Searching takes `O(height)`. Inserting already sorted values into a plain BST
//! collapses it into a list of height `N - 1`. Building the tree with
//! [`Balance::Avl`] rotates nodes after every insertion so the height stays
//! `O(lg N)`.
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut plain: Tree<i32> = Tree::ordered();
//! let mut avl: Tree<i32> = Tree::ordered_balanced();
//! for x in 1..=1000 {
//!     plain.insert(x);
//!     avl.insert(x);
//! }
//!
//! assert_eq!(plain.height(), Ok(999));
//! assert!(avl.height().unwrap() <= 13);
//! assert!(avl.in_order().copied().eq(1..=1000));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
pub mod iter;
mod node;
mod tree;

pub use balance::Balance;
pub use error::TreeError;
pub use tree::Tree;
