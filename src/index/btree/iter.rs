//! Read-only walks over a B-tree.
//!
//! - [`Iter`] - entries in ascending key order (in-order)
//! - [`Traversal`] - nodes in pre-order, for diagnostics

use super::Node;

/// In-order iterator over `(&key, &value)` pairs.
///
/// Uses an explicit stack of `(node, next entry index)` frames instead of
/// recursion, so its depth cost is bounded by the tree height.
pub struct Iter<'a, K, V> {
    stack: Vec<(&'a Node<K, V>, usize)>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: &'a Node<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost(root);
        iter
    }

    /// Push `node` and its leftmost descendants down to a leaf.
    fn push_leftmost(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let (node, idx) = *top;

            if idx < node.len() {
                top.1 += 1;
                if !node.is_leaf() {
                    self.push_leftmost(&node.children[idx + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                let entry = &node.entries[idx];
                return Some((&entry.key, &entry.value));
            }

            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// A node reached by a [`Traversal`].
#[derive(Debug)]
pub struct NodeVisit<'a, K, V> {
    /// Distance from the root (root = 0).
    pub depth: usize,
    pub node: &'a Node<K, V>,
}

impl<'a, K, V> NodeVisit<'a, K, V> {
    /// Number of entries in the visited node.
    pub fn len(&self) -> usize {
        self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Keys of the visited node in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + 'a {
        let node = self.node;
        node.entries.iter().map(|entry| &entry.key)
    }
}

/// Depth-first, pre-order walk: each node is visited exactly once, before
/// its children, and children are visited left to right.
pub struct Traversal<'a, K, V> {
    stack: Vec<(&'a Node<K, V>, usize)>,
}

impl<'a, K, V> Traversal<'a, K, V> {
    pub(super) fn new(root: &'a Node<K, V>) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a, K, V> Iterator for Traversal<'a, K, V> {
    type Item = NodeVisit<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        Some(NodeVisit { depth, node })
    }
}
