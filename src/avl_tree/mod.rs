//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one. Equal keys are permitted and are kept in the left subtree of their
//! equals.

mod multiset;
mod node;
mod tree;

pub use self::multiset::{
    AvlMultiset, AvlMultisetIntoIter, AvlMultisetIter, AvlMultisetLevelOrderIter,
    AvlMultisetPostOrderIter, AvlMultisetPreOrderIter,
};
