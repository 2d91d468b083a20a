//! Immutable set of past answers
//!
//! Built once per refresh; a new refresh replaces the whole set.

use rustc_hash::FxHashSet;

/// Unique lowercase past-answer words, no ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    words: FxHashSet<String>,
}

impl AnswerSet {
    /// Build a set from already-normalized (lowercase) words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Check membership of a lowercase word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of unique answers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set holds no answers
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
