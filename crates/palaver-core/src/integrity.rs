//! Integrity report over a node snapshot.
//!
//! The query layer tolerates duplicate option ids, dangling links and stale
//! cached names. This module surfaces them so the editor can show or fix
//! them; it never fails.

use crate::index::nodes_by_id;
use crate::links::{resolve_link, stale_link_names, LinkTarget};
use crate::types::Node;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("option {option_id} appears on node {first_node} and again on node {second_node}")]
    DuplicateOptionId {
        option_id: String,
        first_node: String,
        second_node: String,
    },

    #[error("option {option_id} on node {node_id} links to {next_node_id}, which doesn't exist")]
    DanglingLink {
        node_id: String,
        option_id: String,
        next_node_id: String,
    },

    #[error("option {option_id} on node {node_id} caches name {cached:?}, target is named {actual:?}")]
    StaleLinkName {
        node_id: String,
        option_id: String,
        cached: Option<String>,
        actual: String,
    },
}

impl IntegrityIssue {
    /// Id of the option the issue is about.
    pub fn option_id(&self) -> &str {
        match self {
            IntegrityIssue::DuplicateOptionId { option_id, .. }
            | IntegrityIssue::DanglingLink { option_id, .. }
            | IntegrityIssue::StaleLinkName { option_id, .. } => option_id,
        }
    }
}

/// Every integrity issue in `nodes`.
///
/// Duplicates come first, then dangling links, then stale names; each group
/// is in discovery order.
pub fn check(nodes: &[Node]) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for node in nodes {
        for option in &node.options {
            if let Some(first) = seen.insert(&option.id, &node.id) {
                issues.push(IntegrityIssue::DuplicateOptionId {
                    option_id: option.id.clone(),
                    first_node: first.to_string(),
                    second_node: node.id.clone(),
                });
            }
        }
    }

    let by_id = nodes_by_id(nodes);
    for node in nodes {
        for option in &node.options {
            if let LinkTarget::Missing { id, .. } = resolve_link(option, &by_id) {
                issues.push(IntegrityIssue::DanglingLink {
                    node_id: node.id.clone(),
                    option_id: option.id.clone(),
                    next_node_id: id.to_string(),
                });
            }
        }
    }

    issues.extend(stale_link_names(nodes).into_iter().map(|s| {
        IntegrityIssue::StaleLinkName {
            node_id: s.node_id.to_string(),
            option_id: s.option_id.to_string(),
            cached: s.cached.map(str::to_string),
            actual: s.actual.to_string(),
        }
    }));

    if !issues.is_empty() {
        tracing::warn!(issues = issues.len(), "integrity: drift found");
    }
    issues
}
