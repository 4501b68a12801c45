//! Letter multisets
//!
//! A word is spellable from a root word when its letter multiset fits inside
//! the root's. `LetterCounts` is that multiset, consumed one letter at a time.

use rustc_hash::FxHashMap;

/// Remaining occurrences of each letter of a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count every letter of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter` still available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` and leaves the counts untouched if none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume every letter of `word` in order, stopping at the first miss
    ///
    /// Returns `true` only if all letters were available.
    pub fn take_all(&mut self, word: &str) -> bool {
        word.chars().all(|ch| self.take(ch))
    }
}
