//! B-tree with preemptive, top-down node splitting.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use super::iter::{Iter, Traversal};
use super::stats::TreeStats;
use super::{Entry, Node};
use crate::common::{Error, Result, TreeConfig};

/// An in-memory B-tree mapping ordered keys to values.
///
/// # Insertion Strategy
/// Overflow is resolved on the way down. Before descending into a child
/// that already holds `maximum` entries, the child is split and its median
/// promoted into the current node:
/// ```text
///   before:          [ 20 ]                after:        [ 20 | 40 ]
///                   /      \                            /     |     \
///             [ 10 ]   [ 30 | 40 | 50 ]          [ 10 ]   [ 30 ]   [ 50 ]
/// ```
/// The node being descended from always has room for the promoted median
/// because it was itself checked by its parent (or is a freshly grown
/// root), so an insertion never walks back up the tree and performs at
/// most one split per level.
///
/// # Duplicate Keys
/// Keys are unique. [`insert`](Self::insert) overwrites the value of an
/// existing key and returns the previous value;
/// [`try_insert`](Self::try_insert) rejects the key instead.
///
/// # Thread Safety
/// `BTree` is not synchronized. Wrap it in a
/// [`SharedBTree`](super::SharedBTree) for access from several threads.
///
/// # Example
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::with_maximum(3).unwrap();
/// for key in 1..=4 {
///     tree.insert(key, key * 100);
/// }
///
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.get(&4), Some(&400));
/// assert_eq!(tree.get(&99), None);
/// ```
#[derive(Debug, Clone)]
pub struct BTree<K, V> {
    root: Node<K, V>,
    config: TreeConfig,
    /// Total number of entries.
    len: usize,
    /// Number of levels, 1 for a lone root.
    height: usize,
    stats: TreeStats,
}

impl<K, V> BTree<K, V> {
    /// Create an empty tree with the default node capacity.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree with a validated config.
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            root: Node::new(true),
            config,
            len: 0,
            height: 1,
            stats: TreeStats::new(),
        }
    }

    /// Create an empty tree whose nodes hold at most `maximum` entries.
    ///
    /// # Errors
    /// Returns `Error::InvalidMaximum` if `maximum` is zero or even.
    pub fn with_maximum(maximum: usize) -> Result<Self> {
        Ok(Self::with_config(TreeConfig::new(maximum)?))
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels. Every leaf sits at depth `height() - 1`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The root node, for inspection.
    pub fn root(&self) -> &Node<K, V> {
        &self.root
    }

    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.traverse().count()
    }

    /// Iterate over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    /// Walk every node in pre-order (parent first, children left to right).
    pub fn traverse(&self) -> Traversal<'_, K, V> {
        Traversal::new(&self.root)
    }

    /// Split the full child `parent.children[idx]` around its median.
    ///
    /// The child keeps its first `minimum` entries, a new right sibling
    /// takes the last `minimum`, and the median moves into `parent` at
    /// `idx`. For internal children the child slots are divided the same
    /// way, so both halves keep one more child than entries.
    ///
    /// The caller guarantees `parent` has room for one more entry.
    fn split_child(parent: &mut Node<K, V>, idx: usize, minimum: usize) {
        let left = &mut parent.children[idx];
        debug_assert_eq!(left.len(), 2 * minimum + 1);

        let right_entries = left.entries.split_off(minimum + 1);
        let middle = left.entries.remove(minimum);
        let right_children = if left.is_leaf() {
            Vec::new()
        } else {
            left.children.split_off(minimum + 1)
        };
        let right = Node::from_parts(left.is_leaf(), right_entries, right_children);

        parent.entries.insert(idx, middle);
        parent.children.insert(idx + 1, right);
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Look up the entry stored under `key`.
    ///
    /// Returns `None` if the key is absent. Never modifies the tree.
    pub fn search(&self, key: &K) -> Option<&Entry<K, V>> {
        TreeStats::bump(&self.stats.searches);

        let found = self.find(key);
        if found.is_some() {
            TreeStats::bump(&self.stats.search_hits);
        }
        found
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    fn find(&self, key: &K) -> Option<&Entry<K, V>> {
        let mut node = &self.root;
        loop {
            match node.find_slot(key) {
                Ok(idx) => return Some(&node.entries[idx]),
                Err(_) if node.is_leaf() => return None,
                Err(idx) => node = &node.children[idx],
            }
        }
    }

    /// Insert `key` with `value`, overwriting any existing value.
    ///
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let maximum = self.config.maximum();
        let minimum = self.config.minimum();

        if self.root.is_full(maximum) {
            self.grow_root();
        }

        let mut node = &mut self.root;
        let mut depth = 0;
        loop {
            let mut idx = match node.find_slot(&key) {
                Ok(idx) => {
                    TreeStats::bump(&self.stats.overwrites);
                    return Some(std::mem::replace(&mut node.entries[idx].value, value));
                }
                Err(idx) => idx,
            };

            if node.is_leaf() {
                node.entries.insert(idx, Entry::new(key, value));
                self.len += 1;
                TreeStats::bump(&self.stats.inserts);
                trace!(depth, position = idx, "inserted into leaf");
                return None;
            }

            if node.children[idx].is_full(maximum) {
                Self::split_child(node, idx, minimum);
                TreeStats::bump(&self.stats.splits);
                debug!(depth = depth + 1, child = idx, "split full child before descent");

                // The promoted median now sits at `idx`; the key may belong
                // to the new right sibling or be the median itself.
                match node.entry_cmp(idx, &key) {
                    Ordering::Less => idx += 1,
                    Ordering::Equal => {
                        TreeStats::bump(&self.stats.overwrites);
                        return Some(std::mem::replace(&mut node.entries[idx].value, value));
                    }
                    Ordering::Greater => {}
                }
            }

            node = &mut node.children[idx];
            depth += 1;
        }
    }

    /// Insert `key` with `value`, rejecting keys that are already present.
    ///
    /// # Errors
    /// Returns `Error::DuplicateKey` if the key exists. The tree is left
    /// untouched in that case.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<()> {
        if self.find(&key).is_some() {
            return Err(Error::DuplicateKey);
        }
        self.insert(key, value);
        Ok(())
    }

    /// Put a new empty internal root above the full root and split it.
    fn grow_root(&mut self) {
        let old_root = std::mem::replace(&mut self.root, Node::new(false));
        self.root.children.push(old_root);
        Self::split_child(&mut self.root, 0, self.config.minimum());
        self.height += 1;

        TreeStats::bump(&self.stats.splits);
        TreeStats::bump(&self.stats.root_splits);
        debug!(height = self.height, "root split, tree grew a level");
    }

    /// Verify every structural invariant of the tree.
    ///
    /// Checks node capacity bounds, key ordering within and across nodes,
    /// child counts, equal leaf depth, and the cached entry count.
    ///
    /// # Errors
    /// Returns `Error::InvariantViolation` describing the first violation.
    pub fn check_invariants(&self) -> Result<()> {
        let maximum = self.config.maximum();
        let minimum = self.config.minimum();
        let leaf_depth = self.height - 1;
        let mut total = 0;

        // (node, depth, exclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(&Node<K, V>, usize, Option<&K>, Option<&K>)> =
            vec![(&self.root, 0, None, None)];

        while let Some((node, depth, lower, upper)) = stack.pop() {
            let violation = |what: &str| -> Result<()> {
                Err(Error::InvariantViolation(format!(
                    "node at depth {} with {} entries: {}",
                    depth,
                    node.len(),
                    what
                )))
            };

            if node.len() > maximum {
                return violation("more than maximum entries");
            }
            if depth > 0 && node.len() < minimum {
                return violation("fewer than minimum entries");
            }
            if node.entries.windows(2).any(|w| w[0].key >= w[1].key) {
                return violation("keys not strictly ascending");
            }
            if let (Some(lower), Some(first)) = (lower, node.entries.first()) {
                if first.key <= *lower {
                    return violation("key not above parent separator");
                }
            }
            if let (Some(upper), Some(last)) = (upper, node.entries.last()) {
                if last.key >= *upper {
                    return violation("key not below parent separator");
                }
            }

            total += node.len();

            if node.is_leaf() {
                if !node.children.is_empty() {
                    return violation("leaf has children");
                }
                if depth != leaf_depth {
                    return violation("leaf not at tree height");
                }
                continue;
            }

            if node.children.len() != node.len() + 1 {
                return violation("child count is not entry count + 1");
            }
            for (i, child) in node.children.iter().enumerate() {
                let child_lower = if i == 0 {
                    lower
                } else {
                    Some(&node.entries[i - 1].key)
                };
                let child_upper = node.entries.get(i).map(Entry::key).or(upper);
                stack.push((child, depth + 1, child_lower, child_upper));
            }
        }

        if total != self.len {
            return Err(Error::InvariantViolation(format!(
                "tree holds {} entries but len() is {}",
                total, self.len
            )));
        }
        Ok(())
    }
}

impl<K, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for BTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

/// One line per node in pre-order: `Level <depth> <count>: <keys>`.
impl<K: fmt::Display, V> fmt::Display for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.traverse() {
            write!(f, "Level {} {}:", visit.depth, visit.len())?;
            for key in visit.keys() {
                write!(f, " {}", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
