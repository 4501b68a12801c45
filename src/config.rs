//! Game configuration
//!
//! Collected from the command line (with environment fallbacks) in `main`,
//! then handed to the session.

use crate::oracle::DEFAULT_LANGUAGE;
use crate::validator::ValidationRules;

/// Shortest word accepted unless configured otherwise
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Settings shared by every frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Language tag passed to the spell oracle
    pub language: String,
    /// Submissions shorter than this are rejected
    pub min_word_length: usize,
    /// Root word used when the pool is empty; `None` makes an empty pool fatal
    pub fallback_root: Option<String>,
    /// Seed for root-word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            fallback_root: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Validation rules derived from this configuration
    #[must_use]
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            min_word_length: self.min_word_length,
            language: self.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.fallback_root, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rules_follow_config() {
        let config = GameConfig {
            language: "en-GB".to_string(),
            min_word_length: 4,
            ..GameConfig::default()
        };

        let rules = config.rules();
        assert_eq!(rules.min_word_length, 4);
        assert_eq!(rules.language, "en-GB");
    }
}
