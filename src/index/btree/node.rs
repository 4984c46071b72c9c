//! B-tree node: a bounded, sorted run of entries plus child subtrees.

use std::cmp::Ordering;

use super::Entry;

/// A node of the B-tree.
///
/// # Layout
/// ```text
///            entries:   [ e0 ]  [ e1 ]  [ e2 ]
///                      /      |       |      \
///  children:      c0        c1       c2       c3
///
///  keys(c0) < e0 < keys(c1) < e1 < keys(c2) < e2 < keys(c3)
/// ```
///
/// Internal nodes always hold `entries.len() + 1` children; leaves hold
/// none. Each child is owned by exactly one slot of its parent, so the
/// structure is a plain ownership tree with no sharing.
///
/// A node is a passive record: capacity is enforced by
/// [`BTree`](super::BTree), never by the node itself.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(super) entries: Vec<Entry<K, V>>,
    pub(super) children: Vec<Node<K, V>>,
    pub(super) leaf: bool,
}

impl<K, V> Node<K, V> {
    /// Create an empty leaf or internal node.
    pub(super) fn new(leaf: bool) -> Self {
        Self {
            entries: Vec::new(),
            children: Vec::new(),
            leaf,
        }
    }

    /// Build a node from already-sorted parts.
    pub(super) fn from_parts(
        leaf: bool,
        entries: Vec<Entry<K, V>>,
        children: Vec<Node<K, V>>,
    ) -> Self {
        debug_assert!(!leaf || children.is_empty());
        Self {
            entries,
            children,
            leaf,
        }
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Number of entries in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this node holds no entries (only the root of an empty tree).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// Child subtrees, left to right. Empty for leaves.
    pub fn children(&self) -> &[Node<K, V>] {
        &self.children
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(Entry::key)
    }

    #[inline]
    pub(super) fn is_full(&self, maximum: usize) -> bool {
        self.entries.len() >= maximum
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Locate `key` within this node's entries.
    ///
    /// Returns `Ok(i)` if `entries[i]` holds `key`, otherwise `Err(i)`
    /// where `i` is the index of the first entry greater than `key`. For an
    /// internal node, `Err(i)` is also the index of the child whose subtree
    /// may contain `key`.
    pub(super) fn find_slot(&self, key: &K) -> Result<usize, usize> {
        self.entries.binary_search_by(|entry| entry.key.cmp(key))
    }

    /// Compare the key of `entries[idx]` against `key`.
    pub(super) fn entry_cmp(&self, idx: usize, key: &K) -> Ordering {
        self.entries[idx].key.cmp(key)
    }
}
