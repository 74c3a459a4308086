//! Search layer — free-text filtering over a node snapshot.
//!
//! A node matches a query (case-insensitive substring) when:
//!
//! 1. its name contains the query,
//! 2. any of its lines or options contains the query in a text field, or
//! 3. one of its options links to a node matched by rule 1.
//!
//! Rule 3 is a single hop. A link counts when the option's target id
//! resolves to a name-matched node, or when its cached `next_node_name`
//! equals such a node's name, so referrers surface whether or not the name
//! cache is current. Results keep the order of the input collection.

use crate::config::{EmptyQuery, SearchConfig};
use crate::types::{DialogueOption, Node};
use std::collections::HashSet;
use std::fmt;

/// Why a node was included in the results. Rules are checked in order and
/// the first one that applies is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchReason {
    Name,
    Content,
    /// An option links to a node whose name matched.
    LinksTo,
    /// The query was empty and the policy is [`EmptyQuery::MatchAll`].
    EmptyQuery,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Name => write!(f, "name"),
            MatchReason::Content => write!(f, "content"),
            MatchReason::LinksTo => write!(f, "links to match"),
            MatchReason::EmptyQuery => write!(f, "empty query"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub node: &'a Node,
    pub reason: MatchReason,
}

/// Query engine configured by the `[search]` config section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Search {
    config: SearchConfig,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes matching `query`, in collection order.
    pub fn filter<'a>(&self, query: &str, nodes: &'a [Node]) -> Vec<&'a Node> {
        self.explain(query, nodes)
            .into_iter()
            .map(|hit| hit.node)
            .collect()
    }

    /// Like [`filter`](Self::filter), but reports which rule matched each node.
    pub fn explain<'a>(&self, query: &str, nodes: &'a [Node]) -> Vec<SearchHit<'a>> {
        if nodes.is_empty() {
            return Vec::new();
        }

        if query.trim().is_empty() {
            tracing::debug!(policy = ?self.config.empty_query, "search: empty query");
            return match self.config.empty_query {
                EmptyQuery::MatchNone => Vec::new(),
                EmptyQuery::MatchAll => nodes
                    .iter()
                    .map(|node| SearchHit { node, reason: MatchReason::EmptyQuery })
                    .collect(),
            };
        }

        let needle = query.to_lowercase();
        let named: Vec<bool> = nodes.iter().map(|n| contains(&n.name, &needle)).collect();

        let mut linked_ids = HashSet::new();
        let mut linked_names = HashSet::new();
        if self.config.follow_links {
            for (node, _) in nodes.iter().zip(&named).filter(|(_, hit)| **hit) {
                linked_ids.insert(node.id.as_str());
                linked_names.insert(node.name.as_str());
            }
        }

        let hits: Vec<SearchHit<'a>> = nodes
            .iter()
            .zip(named)
            .filter_map(|(node, named)| {
                let reason = if named {
                    MatchReason::Name
                } else if content_matches(node, &needle) {
                    MatchReason::Content
                } else if node
                    .options
                    .iter()
                    .any(|o| links_into(o, &linked_ids, &linked_names))
                {
                    MatchReason::LinksTo
                } else {
                    return None;
                };
                Some(SearchHit { node, reason })
            })
            .collect();

        tracing::debug!(query = %query, nodes = nodes.len(), matches = hits.len(), "search: filtered");
        hits
    }
}

/// Nodes matching `query` under the default search policy.
pub fn filter_nodes<'a>(query: &str, nodes: &'a [Node]) -> Vec<&'a Node> {
    Search::default().filter(query, nodes)
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn content_matches(node: &Node, needle: &str) -> bool {
    node.lines
        .iter()
        .flat_map(|line| line.text_fields())
        .chain(node.options.iter().flat_map(|option| option.text_fields()))
        .any(|text| contains(text, needle))
}

fn links_into(option: &DialogueOption, ids: &HashSet<&str>, names: &HashSet<&str>) -> bool {
    if let Some(id) = option.next_node_id.as_deref() {
        if ids.contains(id) {
            return true;
        }
    }
    option
        .next_node_name
        .as_deref()
        .is_some_and(|name| names.contains(name))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
