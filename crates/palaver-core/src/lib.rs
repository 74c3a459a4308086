//! palaver-core — graph query and consistency engine for dialogue trees.
//!
//! A dialogue tree is a snapshot of [`Node`]s, each holding dialogue
//! [`Line`]s and [`DialogueOption`]s that link to other nodes or end the
//! conversation. Every operation here is a pure, synchronous function of the
//! snapshot it is given; derived views borrow from it and nothing is cached
//! between calls.
//!
//! # Layers
//!
//! ```text
//! types ──► index ──► links ──► integrity
//!   │         │         │
//!   └─────────┴──► search
//! util (key_by / sort_by / plural) is shared by all of the above.
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod integrity;
pub mod links;
pub mod search;
pub mod types;
pub mod util;

pub use error::{Error, Result};
pub use index::{nodes_by_id, nodes_by_option_id, OptionIndex};
pub use links::{find_links_to_node, resolve_link, LinkTarget};
pub use search::{filter_nodes, Search};
pub use types::{DialogueOption, Line, Node, END_NODE_NAME};
pub use util::{key_by, plural, sort_by};
