//! Ordered collections built on self-balancing binary search trees.

#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
