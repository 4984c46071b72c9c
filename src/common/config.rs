//! Configuration for B-tree node capacity.

use crate::common::{Error, Result};

/// Default maximum number of entries per node.
///
/// Odd, so a full node splits into two halves of equal size around a
/// single median.
pub const DEFAULT_MAXIMUM: usize = 11;

/// Validated node capacity for a [`BTree`](crate::BTree).
///
/// # Capacity Rules
/// - `maximum` is odd and at least 1
/// - `minimum = maximum / 2` is the entry count every non-root node keeps
///   after a split
///
/// With `maximum = 2m + 1` a full node holds exactly `m` entries on each
/// side of its median:
/// ```text
///   [ e0 .. e(m-1) | e(m) | e(m+1) .. e(2m) ]
///      left (m)     median    right (m)
/// ```
///
/// # Example
/// ```
/// use btree_index::TreeConfig;
///
/// let config = TreeConfig::new(5).unwrap();
/// assert_eq!(config.maximum(), 5);
/// assert_eq!(config.minimum(), 2);
///
/// assert!(TreeConfig::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    maximum: usize,
    minimum: usize,
}

impl TreeConfig {
    /// Create a config with the given node capacity.
    ///
    /// # Errors
    /// Returns `Error::InvalidMaximum` if `maximum` is zero or even.
    pub fn new(maximum: usize) -> Result<Self> {
        if maximum == 0 || maximum % 2 == 0 {
            return Err(Error::InvalidMaximum(maximum));
        }

        Ok(Self {
            maximum,
            minimum: maximum / 2,
        })
    }

    /// Maximum number of entries in any node.
    #[inline]
    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Minimum number of entries in any non-root node.
    #[inline]
    pub fn minimum(&self) -> usize {
        self.minimum
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            maximum: DEFAULT_MAXIMUM,
            minimum: DEFAULT_MAXIMUM / 2,
        }
    }
}
