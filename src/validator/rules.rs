//! Individual acceptance predicates
//!
//! Each predicate expects already-normalized input and has no side effects.

use crate::core::LetterCounts;
use crate::oracle::{OracleError, SpellOracle};

/// Whether `word` has not been accepted yet this round
#[inline]
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Whether `word` can be spelled from the letters of `root_word`
///
/// Consumes one occurrence per letter of `word` from a copy of the root's
/// letters, failing at the first letter that has run out. A word is always
/// possible from itself.
///
/// # Examples
/// ```
/// use word_scramble::validator::is_possible;
///
/// assert!(is_possible("silk", "silkworm"));
/// assert!(!is_possible("silkkk", "silkworm"));
/// ```
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    LetterCounts::from_word(root_word).take_all(word)
}

/// Whether the oracle recognizes `word` in `language`
///
/// # Errors
/// Propagates `OracleError` when the oracle cannot answer.
pub fn is_real<O: SpellOracle + ?Sized>(
    word: &str,
    oracle: &O,
    language: &str,
) -> Result<bool, OracleError> {
    oracle.is_misspelled(word, language).map(|misspelled| !misspelled)
}

/// Whether `word` meets the minimum length, counted in characters
#[inline]
#[must_use]
pub fn is_long_enough(word: &str, min_length: usize) -> bool {
    word.chars().count() >= min_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::DictionaryOracle;

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn original_when_unused() {
        assert!(is_original("silk", &[]));
        assert!(is_original("silk", &used(&["worm", "milk"])));
    }

    #[test]
    fn not_original_when_used() {
        let used_words = used(&["worm", "silk", "milk"]);
        for word in &used_words {
            assert!(!is_original(word, &used_words));
        }
    }

    #[test]
    fn original_is_exact_match() {
        // Case folding happens upstream
        assert!(is_original("Silk", &used(&["silk"])));
    }

    #[test]
    fn possible_subsets() {
        assert!(is_possible("silk", "silkworm"));
        assert!(is_possible("worm", "silkworm"));
        assert!(is_possible("milk", "silkworm"));
        assert!(is_possible("rows", "silkworm"));
    }

    #[test]
    fn possible_rejects_excess_letters() {
        // root has a single 'k'
        assert!(!is_possible("silkkk", "silkworm"));
        assert!(!is_possible("sissy", "silkworm"));
    }

    #[test]
    fn possible_rejects_foreign_letters() {
        assert!(!is_possible("xyz", "silkworm"));
        assert!(!is_possible("silky", "silkworm"));
    }

    #[test]
    fn possible_from_itself() {
        assert!(is_possible("silkworm", "silkworm"));
    }

    #[test]
    fn possible_is_case_sensitive() {
        assert!(!is_possible("SILK", "silkworm"));
    }

    #[test]
    fn possible_matches_letter_counts() {
        let root = "mississippi";
        let cases = ["miss", "sip", "pips", "ssss", "sssss", "mm", "piano", ""];

        for word in cases {
            let fits = word.chars().all(|c| {
                word.chars().filter(|&x| x == c).count() <= root.chars().filter(|&x| x == c).count()
            });
            assert_eq!(is_possible(word, root), fits, "{word}");
        }
    }

    #[test]
    fn real_words_follow_oracle() {
        let oracle = DictionaryOracle::new("en", ["silk", "worm"]);
        assert_eq!(is_real("silk", &oracle, "en"), Ok(true));
        assert_eq!(is_real("wirk", &oracle, "en"), Ok(false));
    }

    #[test]
    fn real_propagates_oracle_errors() {
        let oracle = DictionaryOracle::new("en", ["silk"]);
        assert!(matches!(
            is_real("silk", &oracle, "fr"),
            Err(OracleError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn long_enough_counts_chars() {
        assert!(is_long_enough("owl", 3));
        assert!(!is_long_enough("ow", 3));
        assert!(is_long_enough("ow", 1));
        assert!(is_long_enough("élan", 4));
    }
}
