//! Link resolution in both directions.
//!
//! Reverse links ("what points here") are found by scanning forward edges
//! on demand; no reverse-edge structure is kept. Forward links are
//! classified for the link picker as ending the conversation, resolving to
//! a live node, or dangling.

use crate::index::nodes_by_id;
use crate::types::{DialogueOption, Node, END_NODE_NAME};
use std::collections::HashMap;

/// Ids of every option in `nodes` whose destination is `target`.
///
/// Nodes are visited in collection order and options in stored order, so
/// the result is in discovery order. Options on `target` itself count.
/// `None` for `target` yields an empty list.
pub fn find_links_to_node<'a>(target: Option<&Node>, nodes: &'a [Node]) -> Vec<&'a str> {
    let Some(target) = target else {
        return Vec::new();
    };

    let links: Vec<&str> = nodes
        .iter()
        .flat_map(|node| &node.options)
        .filter(|option| option.next_node_id.as_deref() == Some(target.id.as_str()))
        .map(|option| option.id.as_str())
        .collect();

    tracing::debug!(target = %target.id, links = links.len(), "links: reverse scan");
    links
}

/// Where an option leads, as far as the current snapshot can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// No next node: the conversation ends here.
    End,
    /// The target node exists.
    Node(&'a Node),
    /// The option names a node id that is not in the snapshot.
    Missing {
        id: &'a str,
        /// Cached name on the option, offered as the name of a new node.
        name: Option<&'a str>,
    },
}

/// Classify the destination of `option` against a node id lookup.
pub fn resolve_link<'a>(
    option: &'a DialogueOption,
    by_id: &HashMap<&str, &'a Node>,
) -> LinkTarget<'a> {
    match option.next_node_id.as_deref() {
        None => LinkTarget::End,
        Some(id) => match by_id.get(id) {
            Some(node) => LinkTarget::Node(*node),
            None => LinkTarget::Missing {
                id,
                name: option.next_node_name.as_deref(),
            },
        },
    }
}

/// An option whose cached target name disagrees with the live target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleLinkName<'a> {
    /// Node that owns the option.
    pub node_id: &'a str,
    pub option_id: &'a str,
    pub cached: Option<&'a str>,
    /// Name the cache should hold.
    pub actual: &'a str,
}

/// Every option whose `next_node_name` no longer matches its target.
///
/// End options are expected to cache [`END_NODE_NAME`]. Dangling links have
/// nothing to compare against and are skipped.
pub fn stale_link_names(nodes: &[Node]) -> Vec<StaleLinkName<'_>> {
    let by_id = nodes_by_id(nodes);
    let mut stale = Vec::new();

    for node in nodes {
        for option in &node.options {
            let actual = match resolve_link(option, &by_id) {
                LinkTarget::End => END_NODE_NAME,
                LinkTarget::Node(target) => target.name.as_str(),
                LinkTarget::Missing { .. } => continue,
            };
            if option.next_node_name.as_deref() != Some(actual) {
                stale.push(StaleLinkName {
                    node_id: &node.id,
                    option_id: &option.id,
                    cached: option.next_node_name.as_deref(),
                    actual,
                });
            }
        }
    }

    tracing::debug!(nodes = nodes.len(), stale = stale.len(), "links: stale name scan");
    stale
}

/// Rewrite the cached name on every option that targets `node_id`.
///
/// This only touches `next_node_name`; it is what the mutation layer calls
/// after renaming a node. Returns how many options changed.
pub fn propagate_rename(nodes: &mut [Node], node_id: &str, new_name: &str) -> usize {
    let mut updated = 0;
    for option in nodes.iter_mut().flat_map(|n| n.options.iter_mut()) {
        if option.next_node_id.as_deref() != Some(node_id) {
            continue;
        }
        if option.next_node_name.as_deref() != Some(new_name) {
            option.next_node_name = Some(new_name.to_string());
            updated += 1;
        }
    }

    tracing::debug!(node = %node_id, name = %new_name, updated, "links: rename propagated");
    updated
}
