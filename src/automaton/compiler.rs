// Thu Jan 15 2026 - Alex

use crate::automaton::node::{Node, NodeId};
use std::collections::VecDeque;

/// Resolves failure links breadth-first and folds each node's failure output
/// into its own.
pub struct FailureLinkCompiler;

impl FailureLinkCompiler {
    /// A node's link only depends on links at strictly smaller depth, so nodes
    /// must be visited in depth order.
    pub fn compile(nodes: &mut [Node]) {
        let mut queue = VecDeque::new();

        let first_level: Vec<NodeId> = nodes[NodeId::ROOT.index()].children().map(|(_, id)| id).collect();
        for child in first_level {
            nodes[child.index()].failure = NodeId::ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, NodeId)> = nodes[current.index()].children().collect();

            for (c, child) in edges {
                let link = Self::resolve(nodes, nodes[current.index()].failure, c, child);
                nodes[child.index()].failure = link;

                let inherited = nodes[link.index()].output.clone();
                let output = &mut nodes[child.index()].output;
                for index in inherited {
                    if !output.contains(&index) {
                        output.push(index);
                    }
                }

                queue.push_back(child);
            }
        }
    }

    fn resolve(nodes: &[Node], mut fallback: NodeId, c: char, child: NodeId) -> NodeId {
        while !fallback.is_root() && nodes[fallback.index()].child(c).is_none() {
            fallback = nodes[fallback.index()].failure;
        }

        match nodes[fallback.index()].child(c) {
            Some(next) if next != child => next,
            _ => NodeId::ROOT,
        }
    }
}
