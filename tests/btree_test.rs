//! B-tree scenario tests.
//!
//! These drive the public API through the insertion patterns that
//! exercise root growth, preemptive splits, and overwrites.

use btree_index::{BTree, Error, Node, TreeConfig};

fn keys(node: &Node<u32, String>) -> Vec<u32> {
    node.keys().copied().collect()
}

fn value(key: u32) -> String {
    format!("v{}", key)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_capacity() {
    let tree: BTree<u32, String> = BTree::new();
    assert_eq!(tree.config().maximum(), 11);
    assert_eq!(tree.config().minimum(), 5);
    assert!(tree.is_empty());
    assert!(tree.root().is_leaf());
}

#[test]
fn test_invalid_capacity() {
    for maximum in [0, 2, 8] {
        match BTree::<u32, String>::with_maximum(maximum) {
            Err(Error::InvalidMaximum(m)) => assert_eq!(m, maximum),
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("maximum {} should be rejected", maximum),
        }
    }
}

// ============================================================================
// Ascending 1..12 with maximum 3
// ============================================================================

#[test]
fn test_ascending_scenario() {
    let mut tree = BTree::with_config(TreeConfig::new(3).unwrap());

    for key in 1..=3 {
        tree.insert(key, value(key));
        assert_eq!(tree.height(), 1);
    }

    // Fourth insertion splits the full root exactly once.
    tree.insert(4, value(4));
    assert_eq!(tree.stats().snapshot().splits, 1);
    assert_eq!(keys(tree.root()), vec![2]);
    assert_eq!(keys(&tree.root().children()[0]), vec![1]);
    assert_eq!(keys(&tree.root().children()[1]), vec![3, 4]);

    let entry = tree.search(&4).unwrap();
    assert_eq!(entry.key(), &4);
    assert_eq!(entry.value(), "v4");
    assert!(tree.search(&99).is_none());

    for key in 5..=12 {
        tree.insert(key, value(key));
        tree.check_invariants().unwrap();
        assert!(tree.search(&99).is_none());
    }

    assert_eq!(tree.len(), 12);
    for key in 1..=12 {
        assert_eq!(tree.get(&key), Some(&value(key)));
    }
}

#[test]
fn test_ascending_scenario_display() {
    let mut tree = BTree::with_maximum(3).unwrap();
    for key in 1..=12u32 {
        tree.insert(key, value(key));
    }

    // Every line is "Level <depth> <count>: <keys>"
    let text = tree.to_string();
    assert_eq!(text.lines().count(), tree.node_count());
    assert!(text.starts_with("Level 0 "));
    for line in text.lines() {
        let (header, keys) = line.split_once(':').unwrap();
        let count: usize = header.split_whitespace().nth(2).unwrap().parse().unwrap();
        assert_eq!(keys.split_whitespace().count(), count);
    }
}

// ============================================================================
// Default capacity split
// ============================================================================

#[test]
fn test_twelfth_insert_splits_default_root() {
    let mut tree = BTree::new();
    for key in 0..11u32 {
        tree.insert(key, value(key));
    }
    assert_eq!(tree.root().len(), 11);

    tree.insert(11, value(11));

    assert_eq!(keys(tree.root()), vec![5]);
    assert_eq!(keys(&tree.root().children()[0]), vec![0, 1, 2, 3, 4]);
    assert_eq!(keys(&tree.root().children()[1]), vec![6, 7, 8, 9, 10, 11]);
}

// ============================================================================
// Duplicates
// ============================================================================

#[test]
fn test_overwrite_keeps_len() {
    let mut tree = BTree::with_maximum(3).unwrap();
    for key in 0..40u32 {
        tree.insert(key, value(key));
    }

    for key in 0..40u32 {
        let old = tree.insert(key, format!("new{}", key));
        assert_eq!(old, Some(value(key)));
    }

    assert_eq!(tree.len(), 40);
    tree.check_invariants().unwrap();
    assert_eq!(tree.get(&17), Some(&"new17".to_string()));
    assert_eq!(tree.stats().snapshot().overwrites, 40);
}

#[test]
fn test_try_insert_policy() {
    let mut tree = BTree::with_maximum(5).unwrap();
    for key in 0..30u32 {
        tree.try_insert(key, value(key)).unwrap();
    }

    let before = tree.stats().snapshot().splits;
    for key in 0..30u32 {
        assert!(matches!(
            tree.try_insert(key, String::new()),
            Err(Error::DuplicateKey)
        ));
    }

    // Rejected inserts never split.
    assert_eq!(tree.stats().snapshot().splits, before);
    assert_eq!(tree.get(&29), Some(&value(29)));
}

// ============================================================================
// Mixed order
// ============================================================================

#[test]
fn test_interleaved_order() {
    let mut tree = BTree::with_maximum(5).unwrap();
    // Insert evens ascending, then odds descending.
    for key in (0..300u32).step_by(2) {
        tree.insert(key, value(key));
    }
    for key in (1..300u32).step_by(2).rev() {
        tree.insert(key, value(key));
    }

    tree.check_invariants().unwrap();
    let collected: Vec<u32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(collected, (0..300).collect::<Vec<_>>());
}

#[test]
fn test_string_keys() {
    let mut tree = BTree::with_maximum(3).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry", "date"] {
        tree.insert(word.to_string(), word.len());
    }

    let words: Vec<&str> = tree.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        words,
        vec!["apple", "banana", "cherry", "date", "fig", "kiwi", "pear"]
    );
    assert_eq!(tree.get(&"kiwi".to_string()), Some(&4));
}

#[test]
fn test_stats_hit_rate() {
    let mut tree = BTree::new();
    for key in 0..10u32 {
        tree.insert(key, value(key));
    }
    tree.stats().reset();

    for key in 0..20u32 {
        tree.get(&key);
    }

    let snapshot = tree.stats().snapshot();
    assert_eq!(snapshot.searches, 20);
    assert_eq!(snapshot.search_hits, 10);
    assert_eq!(snapshot.hit_rate(), 0.5);
}
