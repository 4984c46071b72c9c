//! B-tree index implementation.
//!
//! An ordered in-memory map built from bounded-capacity nodes. Inserts
//! split full nodes on the way down, so every insertion is a single
//! root-to-leaf pass.
//!
//! # Components
//! - [`BTree`] - The tree: search, insert, split
//! - [`Node`] / [`Entry`] - Passive node and entry records
//! - [`Iter`] / [`Traversal`] - In-order and pre-order walks
//! - [`TreeStats`] - Operation counters
//! - [`SharedBTree`] - Lock-protected handle for multi-threaded callers

mod entry;
mod iter;
mod node;
mod shared;
mod stats;
mod tree;

pub use entry::Entry;
pub use iter::{Iter, NodeVisit, Traversal};
pub use node::Node;
pub use shared::SharedBTree;
pub use stats::{StatsSnapshot, TreeStats};
pub use tree::BTree;
