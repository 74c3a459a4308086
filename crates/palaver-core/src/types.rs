//! Core types for palaver-core.
//!
//! This module defines the entity model every other layer reads: the
//! dialogue [`Node`], the [`Line`]s it speaks and the [`DialogueOption`]s
//! that branch out of it. A node owns its lines and options exclusively;
//! neither has any existence outside its parent.
//!
//! The serde representation uses camelCase field names so the snapshot
//! handed over by the editor's state layer deserializes unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached target name carried by options that end the conversation.
pub const END_NODE_NAME: &str = "END";

/// A conversation state: what is said here and where the player can go next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable unique identifier.
    pub id: String,
    /// Display label. Not guaranteed unique across the graph.
    pub name: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub options: Vec<DialogueOption>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            updated_at: None,
            lines: Vec::new(),
            options: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<Line>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_options(mut self, options: Vec<DialogueOption>) -> Self {
        self.options = options;
        self
    }
}

/// A single piece of dialogue or logic inside a node. Lines carry no edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,
    /// Guard expression, free text.
    #[serde(default)]
    pub condition: Option<String>,
    /// Speaker name.
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub dialogue: String,
    /// Side-effect expression, free text.
    #[serde(default)]
    pub mutation: Option<String>,
}

impl Line {
    pub fn new(id: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dialogue: dialogue.into(),
            ..Self::default()
        }
    }

    /// Every searchable text field, skipping the ones that are unset.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.condition.as_deref(),
            self.character.as_deref(),
            Some(self.dialogue.as_str()),
            self.mutation.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// A player-facing branch out of a node: the source end of a graph edge.
///
/// `next_node_id == None` ends the conversation; `next_node_name` is then
/// expected to hold [`END_NODE_NAME`]. Otherwise `next_node_name` is a
/// denormalized copy of the target's name and may be stale after a rename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueOption {
    /// Unique across the whole node collection.
    pub id: String,
    #[serde(default)]
    pub condition: Option<String>,
    /// Text shown to the player.
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub next_node_id: Option<String>,
    #[serde(default)]
    pub next_node_name: Option<String>,
}

impl DialogueOption {
    /// An option linking to `node`, with the name cache filled in.
    pub fn to_node(id: impl Into<String>, node: &Node) -> Self {
        Self {
            id: id.into(),
            next_node_id: Some(node.id.clone()),
            next_node_name: Some(node.name.clone()),
            ..Self::default()
        }
    }

    /// An option that ends the conversation.
    pub fn end(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            next_node_name: Some(END_NODE_NAME.to_string()),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn is_end(&self) -> bool {
        self.next_node_id.is_none()
    }

    /// Every searchable text field, skipping the ones that are unset.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.condition.as_deref(),
            self.prompt.as_deref(),
            self.next_node_name.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}
