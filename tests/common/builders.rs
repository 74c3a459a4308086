//! Test builders — ergonomic constructors for `Node`, `Line` and
//! `DialogueOption` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use palaver_core::{DialogueOption, Line, Node};

// ---------------------------------------------------------------------------
// NodeBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Node`] test fixtures.
///
/// # Example
///
/// ```rust
/// let node = NodeBuilder::new("gate", "Gate")
///     .line(LineBuilder::new("Halt!").character("Guard").build())
///     .link("ask", "keep", "Keep")
///     .end("leave")
///     .build();
/// ```
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { node: Node::new(id, name) }
    }

    pub fn updated_now(mut self) -> Self {
        self.node.updated_at = Some(chrono::Utc::now());
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.node.lines.push(line);
        self
    }

    pub fn option(mut self, option: DialogueOption) -> Self {
        self.node.options.push(option);
        self
    }

    /// Link to `next_id`, caching `next_name` as the target's name.
    pub fn link(self, option_id: &str, next_id: &str, next_name: &str) -> Self {
        self.option(DialogueOption {
            id: option_id.to_string(),
            next_node_id: Some(next_id.to_string()),
            next_node_name: Some(next_name.to_string()),
            ..DialogueOption::default()
        })
    }

    /// Link to `next_id` without a cached name.
    pub fn bare_link(self, option_id: &str, next_id: &str) -> Self {
        self.option(DialogueOption {
            id: option_id.to_string(),
            next_node_id: Some(next_id.to_string()),
            ..DialogueOption::default()
        })
    }

    pub fn end(self, option_id: &str) -> Self {
        self.option(DialogueOption::end(option_id))
    }

    pub fn build(self) -> Node {
        self.node
    }
}

// ---------------------------------------------------------------------------
// LineBuilder
// ---------------------------------------------------------------------------

pub struct LineBuilder {
    line: Line,
}

impl LineBuilder {
    pub fn new(dialogue: impl Into<String>) -> Self {
        Self { line: Line::new("line", dialogue) }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.line.id = id.into();
        self
    }

    pub fn character(mut self, character: impl Into<String>) -> Self {
        self.line.character = Some(character.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.line.condition = Some(condition.into());
        self
    }

    pub fn mutation(mut self, mutation: impl Into<String>) -> Self {
        self.line.mutation = Some(mutation.into());
        self
    }

    pub fn build(self) -> Line {
        self.line
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A node with no lines and no options.
pub fn bare_node(id: &str, name: &str) -> Node {
    Node::new(id, name)
}

/// Total number of options across `nodes`.
pub fn option_count(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| n.options.len()).sum()
}
