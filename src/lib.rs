//! btree-index - an in-memory B-tree with preemptive top-down splitting.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          btree-index                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Record Source (source/)                         │   │
//! │  │     RecordReader: "key value" lines → (K, V)             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Index Layer (index/btree/)                      │   │
//! │  │   BTree: search | insert (split before descent)          │   │
//! │  │   Node + Entry   Iter + Traversal   TreeStats            │   │
//! │  │   SharedBTree (RwLock handle for threaded callers)       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Common (common/)                                │   │
//! │  │        TreeConfig (odd node capacity) + Error            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error)
//! - [`index`] - Index structures (B-tree)
//! - [`source`] - Record readers feeding the tree
//!
//! # Quick Start
//! ```
//! use btree_index::{BTree, TreeConfig};
//!
//! let mut tree = BTree::with_config(TreeConfig::new(5).unwrap());
//! for key in [30, 10, 20, 50, 40, 60] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! assert_eq!(tree.get(&40).map(String::as_str), Some("40"));
//! assert!(tree.search(&99).is_none());
//! tree.check_invariants().unwrap();
//! ```

pub mod common;
pub mod index;
pub mod source;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_MAXIMUM;
pub use common::{Error, Result, TreeConfig};

pub use index::btree::{
    BTree, Entry, Iter, Node, NodeVisit, SharedBTree, StatsSnapshot, Traversal, TreeStats,
};
pub use source::{load_into, RecordReader};
