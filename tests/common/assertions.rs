//! Domain-specific assertion macros for palaver harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* graph query returned the wrong thing.

use palaver_core::{Node, OptionIndex};

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that a slice of node references has exactly these ids, in order.
///
/// ```rust
/// assert_node_ids!(filter_nodes("slug1", &nodes), ["id1", "id3"]);
/// ```
#[macro_export]
macro_rules! assert_node_ids {
    ($nodes:expr, [$($id:expr),* $(,)?]) => {{
        let nodes: &[&palaver_core::Node] = &$nodes;
        let actual: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_node_ids! failed: result ids differ (order matters)"
        );
    }};
}

/// Assert that `index` maps `option_id` to the node with `owner_id`.
#[macro_export]
macro_rules! assert_owner {
    ($index:expr, $option_id:expr, $owner_id:expr) => {{
        let option_id: &str = $option_id;
        let expected: &str = $owner_id;
        match $index.owner(option_id) {
            Some(node) if node.id == expected => {}
            Some(node) => panic!(
                "assert_owner! failed:\n  option:   {:?}\n  expected: {:?}\n  actual:   {:?}",
                option_id, expected, node.id
            ),
            None => panic!(
                "assert_owner! failed: option {:?} is not indexed ({} entries)",
                option_id,
                $index.len()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Assert the index holds one entry per option and maps each to its owner.
/// Only meaningful when option ids are unique.
pub fn assert_index_complete(index: &OptionIndex<'_>, nodes: &[Node]) {
    let expected: usize = nodes.iter().map(|n| n.options.len()).sum();
    assert_eq!(
        index.len(),
        expected,
        "index must hold exactly one entry per option"
    );
    for node in nodes {
        for option in &node.options {
            let owner = index
                .owner(&option.id)
                .unwrap_or_else(|| panic!("option {:?} missing from index", option.id));
            assert_eq!(owner.id, node.id, "option {:?} mapped to wrong owner", option.id);
        }
    }
}

/// Assert `subset` appears in `all` in the same relative order.
pub fn assert_preserves_order(subset: &[&Node], all: &[Node]) {
    let positions: Vec<usize> = subset
        .iter()
        .map(|n| {
            all.iter()
                .position(|m| std::ptr::eq(m, *n))
                .unwrap_or_else(|| panic!("result node {:?} is not from the input", n.id))
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "results out of collection order: {positions:?}"
    );
}
