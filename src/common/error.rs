//! Error types for the B-tree index.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the index and its record source.
///
/// A missing key is not an error: lookups return `None` instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Node capacity is zero or even.
    ///
    /// An even capacity cannot be split into two halves of `maximum / 2`
    /// entries around a single median.
    #[error("Invalid node capacity {0}: must be odd and at least 1")]
    InvalidMaximum(usize),

    /// `try_insert` found the key already present.
    #[error("Key already exists")]
    DuplicateKey,

    /// I/O error while reading a record source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record line could not be parsed.
    ///
    /// `line` is 1-based.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A structural check failed.
    ///
    /// This indicates a bug in the tree maintenance code.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}
