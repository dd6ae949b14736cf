// Thu Jan 15 2026 - Alex

use crate::automaton::node::{Node, NodeId};
use crate::pattern::{MatchResult, PatternSet};
use serde::Serialize;

/// Nodes visited during a scan: the root, then one entry per consumed character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    nodes: Vec<NodeId>,
}

impl Trace {
    fn with_capacity(chars: usize) -> Self {
        let mut nodes = Vec::with_capacity(chars + 1);
        nodes.push(NodeId::ROOT);
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Node the scan ended in.
    pub fn last(&self) -> NodeId {
        self.nodes.last().copied().unwrap_or(NodeId::ROOT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<'a> {
    matches: Vec<MatchResult<'a>>,
    trace: Trace,
}

impl<'a> SearchOutcome<'a> {
    pub fn matches(&self) -> &[MatchResult<'a>] {
        &self.matches
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn chars_processed(&self) -> usize {
        self.trace.len() - 1
    }

    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_parts(self) -> (Vec<MatchResult<'a>>, Trace) {
        (self.matches, self.trace)
    }
}

/// Drives a compiled node arena over input text. Holds only shared borrows,
/// so any number of engines can scan the same automaton at once.
pub struct MatchEngine<'a> {
    nodes: &'a [Node],
    patterns: &'a PatternSet,
}

impl<'a> MatchEngine<'a> {
    pub(crate) fn new(nodes: &'a [Node], patterns: &'a PatternSet) -> Self {
        Self { nodes, patterns }
    }

    pub fn search(&self, text: &str) -> SearchOutcome<'a> {
        let mut matches = Vec::new();
        let mut trace = Trace::with_capacity(text.len());
        let mut current = NodeId::ROOT;

        for (position, c) in text.chars().enumerate() {
            current = self.transition(current, c).0;
            trace.nodes.push(current);

            for &index in self.nodes[current.index()].output() {
                let pattern = self.patterns.at(index);
                matches.push(MatchResult::spanning(position, self.patterns.char_len_at(index), pattern));
            }
        }

        SearchOutcome { matches, trace }
    }

    /// Stops at the first completed signature.
    pub fn find_first(&self, text: &str) -> Option<MatchResult<'a>> {
        let mut current = NodeId::ROOT;

        for (position, c) in text.chars().enumerate() {
            current = self.transition(current, c).0;
            if let Some(&index) = self.nodes[current.index()].output().first() {
                let pattern = self.patterns.at(index);
                return Some(MatchResult::spanning(position, self.patterns.char_len_at(index), pattern));
            }
        }
        None
    }

    /// Next node for `c`, and how many failure links were followed to get there.
    /// Every jump strictly reduces depth, so the count never exceeds the
    /// depth of `from`.
    fn transition(&self, mut from: NodeId, c: char) -> (NodeId, usize) {
        let mut jumps = 0;
        loop {
            let node = &self.nodes[from.index()];
            if let Some(next) = node.child(c) {
                return (next, jumps);
            }
            if from.is_root() {
                return (NodeId::ROOT, jumps);
            }
            from = node.failure();
            jumps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::builder::TrieBuilder;
    use crate::automaton::compiler::FailureLinkCompiler;
    use crate::pattern::{Pattern, Severity};

    fn compiled(texts: &[&str]) -> (Vec<Node>, PatternSet) {
        let patterns = PatternSet::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| Pattern::new(i as u32, text, text, Severity::High).unwrap())
                .collect(),
        )
        .unwrap();
        let mut builder = TrieBuilder::new();
        for (i, pattern) in patterns.iter().enumerate() {
            builder.insert(i, pattern);
        }
        let mut nodes = builder.finish();
        FailureLinkCompiler::compile(&mut nodes);
        (nodes, patterns)
    }

    #[test]
    fn test_overlapping_matches_in_end_order() {
        let (nodes, patterns) = compiled(&["HE", "SHE", "HIS", "HERS"]);
        let engine = MatchEngine::new(&nodes, &patterns);
        let outcome = engine.search("USHERS");

        let found: Vec<(u32, usize)> = outcome.matches().iter().map(|m| (m.pattern_id(), m.start())).collect();
        assert_eq!(found, vec![(1, 1), (0, 2), (3, 2)]);
        assert_eq!(outcome.trace().len(), 7);
    }

    #[test]
    fn test_empty_text() {
        let (nodes, patterns) = compiled(&["OR"]);
        let outcome = MatchEngine::new(&nodes, &patterns).search("");
        assert!(outcome.is_clean());
        assert_eq!(outcome.trace().as_slice(), &[NodeId::ROOT]);
        assert_eq!(outcome.chars_processed(), 0);
    }

    #[test]
    fn test_unknown_characters_stay_at_root() {
        let (nodes, patterns) = compiled(&["AB"]);
        let outcome = MatchEngine::new(&nodes, &patterns).search("xyz");
        assert!(outcome.trace().iter().all(NodeId::is_root));
    }

    #[test]
    fn test_find_first() {
        let (nodes, patterns) = compiled(&["DROP TABLE", "--"]);
        let engine = MatchEngine::new(&nodes, &patterns);

        let first = engine.find_first("X'; DROP TABLE USERS; --").unwrap();
        assert_eq!(first.pattern_id(), 0);
        assert_eq!(first.start(), 4);
        assert!(engine.find_first("HELLO").is_none());
    }

    #[test]
    fn test_jumps_bounded_by_depth() {
        let (nodes, patterns) = compiled(&["AAAB", "AAB", "AB", "ABA"]);
        let engine = MatchEngine::new(&nodes, &patterns);
        let max_len = patterns.max_len();

        let mut current = NodeId::ROOT;
        for c in "AAAAABAAABABAAAAC".chars() {
            let depth = nodes[current.index()].depth();
            let (next, jumps) = engine.transition(current, c);
            assert!(jumps <= depth);
            assert!(jumps <= max_len);
            current = next;
        }
    }
}
