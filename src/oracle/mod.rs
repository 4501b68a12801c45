//! Spell-check capability
//!
//! Deciding whether a word is real is delegated to a `SpellOracle`. The crate
//! ships a word-set implementation; tests and hosts can inject their own.

mod dictionary;

pub use dictionary::DictionaryOracle;

use thiserror::Error;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors an oracle can report instead of an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("spell oracle unavailable: {0}")]
    Unavailable(String),
    #[error("language '{requested}' not supported (oracle supports '{supported}')")]
    UnsupportedLanguage { requested: String, supported: String },
}

/// A source of truth for "is this a real word in language L"
pub trait SpellOracle {
    /// Whether `word` is misspelled in `language`
    ///
    /// `word` is already normalized. Returns `Ok(false)` for recognized words.
    ///
    /// # Errors
    /// Returns `OracleError` if the oracle cannot answer for this language or
    /// is not usable at all.
    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError>;
}

impl<O: SpellOracle + ?Sized> SpellOracle for &O {
    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError> {
        (**self).is_misspelled(word, language)
    }
}

impl<O: SpellOracle + ?Sized> SpellOracle for Box<O> {
    fn is_misspelled(&self, word: &str, language: &str) -> Result<bool, OracleError> {
        (**self).is_misspelled(word, language)
    }
}

/// Primary subtag of a language tag, lowercased ("en-US" -> "en")
#[must_use]
pub fn primary_language(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
