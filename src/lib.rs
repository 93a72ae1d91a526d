//! This crate exposes an ordered map built on a plain, unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path from
//! the root `Node` to a leaf `Node`) and visiting the left subtree, then the subtree
//! root, then the right subtree yields the keys in sorted order.
//!
//! ## No balancing
//!
//! [`BstMap`][map::BstMap] never rotates nodes. Its shape is decided purely by the
//! order of insertions and deletions, so keys inserted in sorted order give a tree
//! whose height equals its length. Deleting a node with two children moves its whole
//! left subtree under the smallest node of its right subtree, which tends to make the
//! tree taller over time.
//!
//! ## Ordering
//!
//! Keys are ordered by a [`KeyComparator`][compare::KeyComparator]. The default,
//! [`NaturalOrder`][compare::NaturalOrder], uses the key's [`Ord`] implementation.
//! Two keys are the same key when neither is less than the other.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod iter;
pub mod map;
mod node;
pub mod render;
