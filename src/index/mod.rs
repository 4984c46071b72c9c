//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with preemptive splitting

pub mod btree;
