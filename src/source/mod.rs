//! Record sources that feed keyed records into a tree.
//!
//! - [`RecordReader`] - Whitespace-delimited `key value` lines
//! - [`load_into`] - Insert a stream of records into a [`BTree`](crate::BTree)

mod record_reader;

pub use record_reader::{load_into, RecordReader};
