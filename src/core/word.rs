//! Root word representation and submission normalization

use std::fmt;
use thiserror::Error;

/// Normalize raw player input before validation
///
/// Lowercases the text and strips leading/trailing whitespace. Interior
/// whitespace is kept, so "ice cream" stays two words and fails spelling.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The word a round's letters are drawn from
///
/// Always non-empty, lowercase and free of whitespace. Immutable once a round
/// has started.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

/// Error type for unusable root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootWordError {
    #[error("root word must not be empty")]
    Empty,
    #[error("root word '{0}' must be a single word")]
    ContainsWhitespace(String),
}

impl RootWord {
    /// Create a root word, normalizing case and surrounding whitespace
    ///
    /// # Errors
    /// Returns `RootWordError` if the normalized text is empty or contains
    /// whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("SilkWorm").unwrap();
    /// assert_eq!(root.as_str(), "silkworm");
    ///
    /// assert!(RootWord::new("").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, RootWordError> {
        let text = normalize(text);

        if text.is_empty() {
            return Err(RootWordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(RootWordError::ContainsWhitespace(text));
        }

        Ok(Self(text))
    }

    /// Get the root word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
