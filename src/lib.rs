//! This crate provides an unbalanced Binary Search Tree (BST) over any
//! ordered value type, together with a small recursive renderer that lays
//! the tree out on a 2D canvas.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores each value in a `Node` that owns up to two
//! child `Node`s, and keeps the whole structure searchable by ordering
//! every node against its subtrees:
//!
//! 1. Everything in a `Node`'s left subtree is less than its own value.
//! 2. Everything in a `Node`'s right subtree is greater than its own value.
//!
//! Searching, inserting, and removing therefore walk one root-to-leaf path
//! and cost `O(height)`. The tree here does no rebalancing, so the height
//! depends entirely on insertion order: sorted input degenerates into a
//! linked list while shuffled input stays close to `O(lg N)` levels.
//!
//! Duplicate values are never stored - inserting a value that is already
//! present is a silent no-op, as is removing a value that is absent.
//!
//! The [`draw`] module holds the presentation side: a
//! [`Canvas`][draw::Canvas] trait for the line/shape drawing backend and a
//! recursive layout walk over [`Tree`][tree::Tree] that halves its
//! horizontal spacing at each level.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod draw;
pub mod tree;

#[cfg(test)]
mod test;
