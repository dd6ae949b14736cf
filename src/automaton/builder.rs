// Thu Jan 15 2026 - Alex

use crate::automaton::node::{Node, NodeId};
use crate::pattern::Pattern;

/// Grows the shared prefix tree one signature at a time.
pub struct TrieBuilder {
    nodes: Vec<Node>,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
        }
    }

    pub fn with_capacity(chars: usize) -> Self {
        let mut nodes = Vec::with_capacity(chars + 1);
        nodes.push(Node::new(0));
        Self { nodes }
    }

    /// Walks the pattern's characters from the root, creating missing children,
    /// and records `index` at the terminal node. Patterns with identical text
    /// share that node.
    pub fn insert(&mut self, index: usize, pattern: &Pattern) -> NodeId {
        let mut current = NodeId::ROOT;

        for c in pattern.text().chars() {
            current = match self.nodes[current.index()].child(c) {
                Some(next) => next,
                None => {
                    let next = NodeId::from_index(self.nodes.len());
                    let depth = self.nodes[current.index()].depth + 1;
                    self.nodes.push(Node::new(depth));
                    self.nodes[current.index()].children.insert(c, next);
                    next
                }
            };
        }

        let terminal = &mut self.nodes[current.index()].output;
        if !terminal.contains(&index) {
            terminal.push(index);
        }
        current
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn finish(self) -> Vec<Node> {
        self.nodes
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
