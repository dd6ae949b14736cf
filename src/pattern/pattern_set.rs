// Tue Jan 13 2026 - Alex

use crate::pattern::{Pattern, PatternError};
use ahash::AHashMap;

/// Ordered, immutable collection of signatures. Registration order is preserved
/// and ids are unique.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    by_id: AHashMap<u32, usize>,
    char_lens: Vec<usize>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, PatternError> {
        let mut by_id = AHashMap::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            pattern.validate()?;
            if by_id.insert(pattern.id(), index).is_some() {
                return Err(PatternError::DuplicateId(pattern.id()));
            }
        }
        let char_lens = patterns.iter().map(Pattern::len).collect();
        Ok(Self { patterns, by_id, char_lens })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u32) -> Option<&Pattern> {
        self.by_id.get(&id).map(|&index| &self.patterns[index])
    }

    pub(crate) fn at(&self, index: usize) -> &Pattern {
        &self.patterns[index]
    }

    pub(crate) fn char_len_at(&self, index: usize) -> usize {
        self.char_lens[index]
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Longest signature in characters; bounds failure-link jumps per input character.
    pub fn max_len(&self) -> usize {
        self.char_lens.iter().copied().max().unwrap_or(0)
    }

    pub fn total_len(&self) -> usize {
        self.char_lens.iter().sum()
    }
}
