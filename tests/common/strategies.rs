//! `proptest` strategies for random dialogue graphs.
//!
//! Generated graphs keep the unique-option-id invariant. Option targets are
//! drawn from the graph's own node ids, plus a dangling id and `None` (end).

use palaver_core::{DialogueOption, Node, END_NODE_NAME};
use proptest::prelude::*;

/// Where a generated option leads.
#[derive(Debug, Clone, Copy)]
pub enum Target {
    End,
    Node(usize),
    Dangling,
}

fn arb_target() -> impl Strategy<Value = Target> {
    prop_oneof![
        1 => Just(Target::End),
        6 => any::<usize>().prop_map(Target::Node),
        1 => Just(Target::Dangling),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["intro", "Intro", "guard", "gate", "keep", "END", "inn", "innkeeper"])
        .prop_map(str::to_string)
}

/// A graph of up to `max_nodes` nodes with up to 4 options each.
pub fn arb_graph(max_nodes: usize) -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(
        (arb_name(), prop::collection::vec(arb_target(), 0..4)),
        0..max_nodes,
    )
    .prop_map(|specs| {
        let names: Vec<String> = specs.iter().map(|(name, _)| name.clone()).collect();
        let count = specs.len();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, targets))| {
                let options = targets
                    .into_iter()
                    .enumerate()
                    .map(|(j, target)| {
                        let id = format!("n{i}-o{j}");
                        match target {
                            Target::End => DialogueOption::end(id),
                            Target::Node(k) => DialogueOption {
                                id,
                                next_node_id: Some(format!("n{}", k % count)),
                                next_node_name: Some(names[k % count].clone()),
                                ..DialogueOption::default()
                            },
                            Target::Dangling => DialogueOption {
                                id,
                                next_node_id: Some("ghost".to_string()),
                                next_node_name: Some("ghost".to_string()),
                                ..DialogueOption::default()
                            },
                        }
                    })
                    .collect();
                Node::new(format!("n{i}"), name).with_options(options)
            })
            .collect()
    })
}

/// True when `option` is an end option carrying the sentinel name.
pub fn is_clean_end(option: &DialogueOption) -> bool {
    option.is_end() && option.next_node_name.as_deref() == Some(END_NODE_NAME)
}
