//! Index — derived lookups over a node snapshot.
//!
//! Indices are rebuilt from scratch on every call and borrow from the
//! snapshot they were built from; nothing here is cached or updated
//! incrementally. Callers re-index after each mutation.

use crate::types::Node;
use crate::util::key_by;
use std::collections::HashMap;

/// Option id → the node that *owns* the option (not the node it links to).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionIndex<'a> {
    owners: HashMap<&'a str, &'a Node>,
}

impl<'a> OptionIndex<'a> {
    /// The node holding the option `option_id`, if any.
    pub fn owner(&self, option_id: &str) -> Option<&'a Node> {
        self.owners.get(option_id).copied()
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.owners.contains_key(option_id)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// `(option_id, owner)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Node)> + '_ {
        self.owners.iter().map(|(id, node)| (*id, *node))
    }
}

/// # Panics
///
/// Panics if no node owns `option_id`. Use [`OptionIndex::owner`] when the
/// id may be absent.
impl<'a> std::ops::Index<&str> for OptionIndex<'a> {
    type Output = Node;

    fn index(&self, option_id: &str) -> &Node {
        self.owners[option_id]
    }
}

/// Build the option id → owning node index for `nodes`.
///
/// Every option of every node gets one entry. Should two options share an
/// id, the node visited last wins; the collision is logged, not raised.
pub fn nodes_by_option_id(nodes: &[Node]) -> OptionIndex<'_> {
    let capacity = nodes.iter().map(|n| n.options.len()).sum();
    let mut owners: HashMap<&str, &Node> = HashMap::with_capacity(capacity);

    for node in nodes {
        for option in &node.options {
            if let Some(previous) = owners.insert(option.id.as_str(), node) {
                tracing::warn!(
                    option = %option.id,
                    first = %previous.id,
                    second = %node.id,
                    "index: duplicate option id"
                );
            }
        }
    }

    tracing::debug!(nodes = nodes.len(), options = owners.len(), "index: options keyed");
    OptionIndex { owners }
}

/// Node id → node. Duplicate node ids follow last-write-wins.
pub fn nodes_by_id(nodes: &[Node]) -> HashMap<&str, &Node> {
    key_by(nodes, |n| n.id.as_str())
}
