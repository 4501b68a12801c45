//! Submission validation
//!
//! Runs the acceptance rules in a fixed order and stops at the first
//! failure, so every refused submission gets exactly one reason.

mod rules;

pub use rules::{is_long_enough, is_original, is_possible, is_real};

use crate::config::DEFAULT_MIN_WORD_LENGTH;
use crate::core::{RejectionReason, RootWord, normalize};
use crate::oracle::{DEFAULT_LANGUAGE, OracleError, SpellOracle};

/// Tunable parts of validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_word_length: usize,
    pub language: String,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Result of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing left after normalization
    Empty,
    /// Passed every rule; holds the normalized word
    Accepted(String),
    Rejected(RejectionReason),
}

/// Validate a raw submission against the current round
///
/// Order: normalize, skip empty, originality, feasibility, root-word echo,
/// minimum length, realness. The oracle is only consulted once every local
/// rule has passed.
///
/// # Errors
/// Returns `OracleError` if the spell oracle cannot answer. This is not a
/// rejection: the submission was neither accepted nor refused.
pub fn validate<O: SpellOracle + ?Sized>(
    raw: &str,
    root_word: &RootWord,
    used_words: &[String],
    oracle: &O,
    rules: &ValidationRules,
) -> Result<Verdict, OracleError> {
    let word = normalize(raw);

    if word.is_empty() {
        return Ok(Verdict::Empty);
    }

    let root = root_word.as_str();

    if !is_original(&word, used_words) {
        return Ok(Verdict::Rejected(RejectionReason::already_used()));
    }

    if !is_possible(&word, root) {
        return Ok(Verdict::Rejected(RejectionReason::not_possible(root)));
    }

    if word == root {
        return Ok(Verdict::Rejected(RejectionReason::root_word(root)));
    }

    if !is_long_enough(&word, rules.min_word_length) {
        return Ok(Verdict::Rejected(RejectionReason::too_short(
            rules.min_word_length,
        )));
    }

    if !is_real(&word, oracle, &rules.language)? {
        return Ok(Verdict::Rejected(RejectionReason::not_real()));
    }

    Ok(Verdict::Accepted(word))
}
