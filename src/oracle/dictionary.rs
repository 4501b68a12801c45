//! Word-set spell oracle
//!
//! Knows a fixed set of words for one language. Backed by the embedded
//! dictionary by default, or by any newline-delimited word file.

use super::{DEFAULT_LANGUAGE, OracleError, SpellOracle, primary_language};
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::{WordListError, load_from_file};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Spell oracle answering from an in-memory word set
#[derive(Debug, Clone)]
pub struct DictionaryOracle {
    language: String,
    words: FxHashSet<String>,
}

impl DictionaryOracle {
    /// Create an oracle recognizing exactly `words` for `language`
    ///
    /// Words are lowercased and trimmed; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::oracle::{DictionaryOracle, SpellOracle};
    ///
    /// let oracle = DictionaryOracle::new("en", ["Silk", "worm"]);
    /// assert_eq!(oracle.is_misspelled("silk", "en"), Ok(false));
    /// assert_eq!(oracle.is_misspelled("wirk", "en"), Ok(true));
    /// ```
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: primary_language(language),
            words,
        }
    }

    /// Oracle over the English dictionary compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Load an oracle from a newline-delimited word file
    ///
    /// # Errors
    /// Returns `WordListError` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, WordListError> {
        let words = load_from_file(path)?;
        Ok(Self::new(language, words))
    }
}

impl SpellOracle for DictionaryOracle {
    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError> {
        let requested = primary_language(language);
        if requested != self.language {
            return Err(OracleError::UnsupportedLanguage {
                requested,
                supported: self.language.clone(),
            });
        }

        if self.words.is_empty() {
            return Err(OracleError::Unavailable(
                "dictionary contains no words".to_string(),
            ));
        }

        Ok(!self.words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn known_words_are_not_misspelled() {
        let oracle = DictionaryOracle::new("en", ["silk", "worm", "milk"]);
        assert_eq!(oracle.is_misspelled("silk", "en"), Ok(false));
        assert_eq!(oracle.is_misspelled("milk", "en"), Ok(false));
        assert_eq!(oracle.is_misspelled("xyz", "en"), Ok(true));
    }

    #[test]
    fn words_normalized_on_construction() {
        let oracle = DictionaryOracle::new("en", ["  SILK ", "", "  "]);
        assert_eq!(oracle.words.len(), 1);
        assert_eq!(oracle.is_misspelled("silk", "en"), Ok(false));
    }

    #[test]
    fn region_tags_match_primary_language() {
        let oracle = DictionaryOracle::new("en-US", ["silk"]);
        assert_eq!(oracle.language, "en");
        assert_eq!(oracle.is_misspelled("silk", "en-GB"), Ok(false));
    }

    #[test]
    fn other_language_is_unsupported() {
        let oracle = DictionaryOracle::new("en", ["silk"]);
        assert_eq!(
            oracle.is_misspelled("seide", "de"),
            Err(OracleError::UnsupportedLanguage {
                requested: "de".to_string(),
                supported: "en".to_string(),
            })
        );
    }

    #[test]
    fn empty_dictionary_is_unavailable() {
        let oracle = DictionaryOracle::new("en", Vec::<String>::new());
        assert!(matches!(
            oracle.is_misspelled("silk", "en"),
            Err(OracleError::Unavailable(_))
        ));
    }

    #[test]
    fn builtin_knows_silkworm_words() {
        let oracle = DictionaryOracle::builtin();
        for word in ["silk", "worm", "milk", "silkworm"] {
            assert_eq!(oracle.is_misspelled(word, "en"), Ok(false), "{word}");
        }
        assert_eq!(oracle.is_misspelled("wirk", "en"), Ok(true));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\n\nWorm\n").unwrap();

        let oracle = DictionaryOracle::from_file("en", file.path()).unwrap();
        assert_eq!(oracle.words.len(), 2);
        assert_eq!(oracle.is_misspelled("worm", "en"), Ok(false));
    }

    #[test]
    fn from_missing_file_fails() {
        let result = DictionaryOracle::from_file("en", "/nonexistent/dictionary.txt");
        assert!(result.is_err());
    }
}
