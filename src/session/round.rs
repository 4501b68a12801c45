//! Per-round state

use crate::core::RootWord;

/// The root word and the words accepted against it so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: RootWord,
    used_words: Vec<String>,
}

impl RoundState {
    /// Fresh round with no accepted words
    #[must_use]
    pub const fn new(root_word: RootWord) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
        }
    }

    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Record an accepted word at the front of the list
    ///
    /// Callers validate originality first; the list never holds duplicates.
    pub(crate) fn accept(&mut self, word: String) {
        debug_assert!(!self.used_words.contains(&word), "duplicate word {word}");
        self.used_words.insert(0, word);
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            root_word: &self.root_word,
            used_words: self.used_words.as_slice(),
        }
    }
}

/// Read-only view of a round for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub root_word: &'a RootWord,
    pub used_words: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_is_empty() {
        let round = RoundState::new(RootWord::new("silkworm").unwrap());
        assert_eq!(round.root_word().as_str(), "silkworm");
        assert!(round.used_words().is_empty());
    }

    #[test]
    fn accept_prepends() {
        let mut round = RoundState::new(RootWord::new("silkworm").unwrap());
        round.accept("silk".to_string());
        round.accept("worm".to_string());
        round.accept("milk".to_string());

        assert_eq!(round.used_words(), ["milk", "worm", "silk"]);
    }

    #[test]
    fn snapshot_borrows_state() {
        let mut round = RoundState::new(RootWord::new("silkworm").unwrap());
        round.accept("silk".to_string());

        let snapshot = round.snapshot();
        assert_eq!(snapshot.root_word.as_str(), "silkworm");
        assert_eq!(snapshot.used_words, ["silk"]);
    }
}
