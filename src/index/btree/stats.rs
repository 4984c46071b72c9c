//! B-tree operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by a [`BTree`](super::BTree).
///
/// Lookups take `&self`, so counters are atomics rather than plain integers.
///
/// # Memory Ordering
/// All operations use `Ordering::Relaxed`: counters are independent and
/// only need atomicity, not synchronization with each other.
///
/// # Example
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new();
/// tree.insert(1, "one");
/// tree.get(&1);
/// tree.get(&2);
///
/// let snapshot = tree.stats().snapshot();
/// assert_eq!(snapshot.inserts, 1);
/// assert_eq!(snapshot.searches, 2);
/// assert_eq!(snapshot.search_hits, 1);
/// ```
#[derive(Debug, Default)]
pub struct TreeStats {
    /// Number of entries added (overwrites excluded).
    pub inserts: AtomicU64,

    /// Number of inserts that replaced the value of an existing key.
    pub overwrites: AtomicU64,

    /// Number of node splits, including root splits.
    pub splits: AtomicU64,

    /// Number of times the root was split and the tree grew a level.
    pub root_splits: AtomicU64,

    /// Number of lookups.
    pub searches: AtomicU64,

    /// Number of lookups that found their key.
    pub search_hits: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(super) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a non-atomic copy of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            overwrites: self.overwrites.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            search_hits: self.search_hits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.overwrites.store(0, Ordering::Relaxed);
        self.splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
        self.searches.store(0, Ordering::Relaxed);
        self.search_hits.store(0, Ordering::Relaxed);
    }
}

impl Clone for TreeStats {
    fn clone(&self) -> Self {
        let s = self.snapshot();
        Self {
            inserts: AtomicU64::new(s.inserts),
            overwrites: AtomicU64::new(s.overwrites),
            splits: AtomicU64::new(s.splits),
            root_splits: AtomicU64::new(s.root_splits),
            searches: AtomicU64::new(s.searches),
            search_hits: AtomicU64::new(s.search_hits),
        }
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub overwrites: u64,
    pub splits: u64,
    pub root_splits: u64,
    pub searches: u64,
    pub search_hits: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.search_hits as f64 / self.searches as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, overwrites: {}, splits: {}, root_splits: {}, searches: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.overwrites,
            self.splits,
            self.root_splits,
            self.searches,
            self.hit_rate() * 100.0
        )
    }
}
