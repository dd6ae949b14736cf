// Tue Jan 13 2026 - Alex

use crate::pattern::{Pattern, Severity};
use serde::Serialize;
use std::fmt;

/// One occurrence of a signature. Positions are zero-based character indices
/// into the searched text, `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pattern_id: u32,
    start: usize,
    end: usize,
    pattern: &'a Pattern,
}

impl<'a> MatchResult<'a> {
    /// `None` when `pattern` cannot end at `end` because it is longer than the
    /// text up to and including that position.
    pub fn new(end: usize, pattern: &'a Pattern) -> Option<Self> {
        let start = (end + 1).checked_sub(pattern.len())?;
        Some(Self {
            pattern_id: pattern.id(),
            start,
            end,
            pattern,
        })
    }

    /// `char_len` must not exceed `end + 1`; the engine only emits at nodes
    /// whose depth equals the pattern length.
    pub(crate) fn spanning(end: usize, char_len: usize, pattern: &'a Pattern) -> Self {
        Self {
            pattern_id: pattern.id(),
            start: end + 1 - char_len,
            end,
            pattern,
        }
    }

    pub fn pattern_id(&self) -> u32 {
        self.pattern_id
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn pattern(&self) -> &'a Pattern {
        self.pattern
    }

    pub fn severity(&self) -> Severity {
        self.pattern.severity()
    }

    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The matched slice of `text`, which must be the text that was searched.
    pub fn matched<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut indices = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
        let from = indices.nth(self.start)?;
        let to = indices.nth(self.len() - 1)?;
        text.get(from..to)
    }
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..={}", self.pattern.name(), self.start, self.end)
    }
}
