//! Growing binary-tree packer.
//!
//! [`PackingTree`] keeps its nodes in an arena addressed by [`NodeId`]. Growth
//! allocates a new root and re-parents the old one, so node identity never
//! changes once allocated.

pub mod tree;

pub use tree::{NodeId, PackNode, PackingTree, pack_sequence};
