//! Shared, lock-protected handle to a B-tree.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::BTree;
use crate::common::{Result, TreeConfig};

/// A cloneable handle giving several threads access to one [`BTree`].
///
/// The tree itself is single-threaded; this wrapper serializes writers and
/// lets readers proceed together:
/// - lookups take the read lock (many readers)
/// - inserts take the write lock (one writer)
///
/// Each method holds the lock only for the duration of one tree operation.
/// Use [`read`](Self::read) or [`write`](Self::write) to run several
/// operations under one guard.
///
/// # Example
/// ```
/// use btree_index::SharedBTree;
///
/// let tree = SharedBTree::new();
/// let handle = tree.clone();
///
/// std::thread::spawn(move || {
///     handle.insert(1, "one".to_string());
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(tree.get(&1), Some("one".to_string()));
/// ```
pub struct SharedBTree<K, V> {
    inner: Arc<RwLock<BTree<K, V>>>,
}

impl<K, V> SharedBTree<K, V> {
    /// Create a handle to an empty tree with the default node capacity.
    pub fn new() -> Self {
        Self::from_tree(BTree::new())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self::from_tree(BTree::with_config(config))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BTree<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Acquire shared access to the tree.
    pub fn read(&self) -> RwLockReadGuard<'_, BTree<K, V>> {
        self.inner.read()
    }

    /// Acquire exclusive access to the tree.
    pub fn write(&self) -> RwLockWriteGuard<'_, BTree<K, V>> {
        self.inner.write()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<K: Ord, V> SharedBTree<K, V> {
    /// Insert under the write lock. See [`BTree::insert`].
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Insert under the write lock. See [`BTree::try_insert`].
    pub fn try_insert(&self, key: K, value: V) -> Result<()> {
        self.inner.write().try_insert(key, value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }
}

impl<K: Ord, V: Clone> SharedBTree<K, V> {
    /// Look up `key` under the read lock, returning a copy of its value.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }
}

impl<K, V> Clone for SharedBTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedBTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use std::thread;

    #[test]
    fn test_clone_shares_tree() {
        let tree = SharedBTree::new();
        let other = tree.clone();

        tree.insert(1, 10);
        assert_eq!(other.get(&1), Some(10));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_try_insert_duplicate() {
        let tree = SharedBTree::new();
        tree.try_insert(1, 10).unwrap();
        assert!(matches!(tree.try_insert(1, 11), Err(Error::DuplicateKey)));
        assert_eq!(tree.get(&1), Some(10));
    }

    #[test]
    fn test_guard_batch() {
        let tree = SharedBTree::with_config(TreeConfig::new(3).unwrap());
        {
            let mut guard = tree.write();
            for key in 0..50 {
                guard.insert(key, key);
            }
        }

        let guard = tree.read();
        assert_eq!(guard.len(), 50);
        guard.check_invariants().unwrap();
    }

    #[test]
    fn test_concurrent_writers() {
        let tree = SharedBTree::with_config(TreeConfig::new(5).unwrap());

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let tree = tree.clone();
                thread::spawn(move || {
                    for i in 0..250u32 {
                        let key = i * 4 + t;
                        tree.insert(key, key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(tree.len(), 1000);
        tree.read().check_invariants().unwrap();
        for key in 0..1000u32 {
            assert!(tree.contains_key(&key));
        }
    }
}
