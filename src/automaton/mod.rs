// Thu Jan 15 2026 - Alex

//! Aho-Corasick automaton over a fixed signature set.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. The trie
//! is grown at construction, [`Automaton::build`] resolves failure links once,
//! and from then on the automaton is read-only and can be shared across
//! threads for concurrent searches.

pub mod error;
pub mod node;
pub mod builder;
pub mod compiler;
pub mod engine;

pub use error::AutomatonError;
pub use node::{Node, NodeId};
pub use builder::TrieBuilder;
pub use compiler::FailureLinkCompiler;
pub use engine::{MatchEngine, SearchOutcome, Trace};

use crate::pattern::{MatchResult, Pattern, PatternSet};
use crate::utils::logging::ScopedTimer;

#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    patterns: PatternSet,
    built: bool,
}

impl Automaton {
    /// Inserts every pattern into the trie. Failure links are not resolved
    /// until [`build`](Self::build).
    pub fn new(patterns: PatternSet) -> Self {
        let mut builder = TrieBuilder::with_capacity(patterns.total_len());
        for (index, pattern) in patterns.iter().enumerate() {
            builder.insert(index, pattern);
        }

        Self {
            nodes: builder.finish(),
            patterns,
            built: false,
        }
    }

    /// Construct and build in one step.
    pub fn compile(patterns: PatternSet) -> Result<Self, AutomatonError> {
        let mut automaton = Self::new(patterns);
        automaton.build()?;
        Ok(automaton)
    }

    pub fn build(&mut self) -> Result<(), AutomatonError> {
        if self.built {
            return Err(AutomatonError::InvalidState("automaton is already built"));
        }

        let _timer = ScopedTimer::new("automaton build");
        FailureLinkCompiler::compile(&mut self.nodes);
        self.built = true;

        log::debug!(
            "Built automaton: {} signatures, {} nodes, {} accepting",
            self.patterns.len(),
            self.nodes.len(),
            self.nodes.iter().filter(|n| n.is_accepting()).count()
        );
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Scans `text` in a single pass. Matches come out in non-decreasing end
    /// position; signatures ending at the same character are ordered longest
    /// first.
    pub fn search(&self, text: &str) -> Result<SearchOutcome<'_>, AutomatonError> {
        Ok(self.engine()?.search(text))
    }

    pub fn find_first(&self, text: &str) -> Result<Option<MatchResult<'_>>, AutomatonError> {
        Ok(self.engine()?.find_first(text))
    }

    pub fn is_match(&self, text: &str) -> Result<bool, AutomatonError> {
        Ok(self.find_first(text)?.is_some())
    }

    /// Registered signatures in registration order.
    pub fn patterns(&self) -> Result<&[Pattern], AutomatonError> {
        self.ensure_built()?;
        Ok(self.patterns.as_slice())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn engine(&self) -> Result<MatchEngine<'_>, AutomatonError> {
        self.ensure_built()?;
        Ok(MatchEngine::new(&self.nodes, &self.patterns))
    }

    fn ensure_built(&self) -> Result<(), AutomatonError> {
        if !self.built {
            return Err(AutomatonError::InvalidState("automaton has not been built"));
        }
        Ok(())
    }
}
