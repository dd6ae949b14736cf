// Thu Jan 15 2026 - Alex

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Index of a node in the automaton's arena. Failure links are stored as ids,
/// so the root's self-link and the links pointing back up the trie need no
/// shared ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(super) children: IndexMap<char, NodeId>,
    pub(super) failure: NodeId,
    /// Indices into the pattern set, own completions first.
    pub(super) output: Vec<usize>,
    pub(super) depth: usize,
}

impl Node {
    pub(super) fn new(depth: usize) -> Self {
        Self {
            children: IndexMap::new(),
            failure: NodeId::ROOT,
            output: Vec::new(),
            depth,
        }
    }

    #[inline]
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }

    pub fn failure(&self) -> NodeId {
        self.failure
    }

    pub fn output(&self) -> &[usize] {
        &self.output
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_accepting(&self) -> bool {
        !self.output.is_empty()
    }
}
