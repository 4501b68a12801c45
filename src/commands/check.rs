//! One-shot word checking
//!
//! Plays a single round non-interactively: every word is submitted in order
//! against the given root word, exactly as a player would type them.

use crate::config::GameConfig;
use crate::core::RootWord;
use crate::oracle::SpellOracle;
use crate::session::{Session, SubmissionOutcome};
use anyhow::{Context, Result};

/// Outcome for one checked word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub outcome: SubmissionOutcome,
}

/// Everything a `check` run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub root_word: RootWord,
    pub results: Vec<CheckResult>,
    pub used_words: Vec<String>,
}

impl CheckReport {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, SubmissionOutcome::Accepted(_)))
            .count()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, SubmissionOutcome::Rejected(_)))
            .count()
    }

    /// Whether every non-blank word was accepted
    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.rejected_count() == 0
    }
}

/// Submit `words` in order to a fresh round rooted at `root`
///
/// # Errors
///
/// Returns an error if `root` is not a usable root word or the spell oracle
/// fails.
pub fn check_words<O: SpellOracle>(
    oracle: O,
    config: &GameConfig,
    root: &str,
    words: &[String],
) -> Result<CheckReport> {
    let root_word = RootWord::new(root).with_context(|| format!("invalid root word '{root}'"))?;

    let mut session = Session::new(oracle, Vec::new(), config)?;
    session.start_round_with(root_word.clone());

    let mut results = Vec::with_capacity(words.len());
    for input in words {
        let outcome = session
            .submit(input)
            .with_context(|| format!("failed to check '{input}'"))?;
        results.push(CheckResult {
            input: input.clone(),
            outcome,
        });
    }

    let used_words = session
        .snapshot()
        .map(|snapshot| snapshot.used_words.to_vec())
        .unwrap_or_default();

    Ok(CheckReport {
        root_word,
        results,
        used_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectionKind;
    use crate::oracle::DictionaryOracle;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn oracle() -> DictionaryOracle {
        DictionaryOracle::new("en", ["silk", "worm", "milk"])
    }

    #[test]
    fn checks_words_in_order() {
        let report = check_words(
            oracle(),
            &GameConfig::default(),
            "silkworm",
            &words(&["silk", "worm", "silk", "silkkk", "   "]),
        )
        .unwrap();

        assert_eq!(report.root_word.as_str(), "silkworm");
        assert_eq!(report.results.len(), 5);
        assert_eq!(report.accepted_count(), 2);
        assert_eq!(report.rejected_count(), 2);
        assert_eq!(report.used_words, ["worm", "silk"]);
        assert_eq!(report.results[4].outcome, SubmissionOutcome::NoOp);

        match &report.results[2].outcome {
            SubmissionOutcome::Rejected(reason) => {
                assert_eq!(reason.kind, RejectionKind::AlreadyUsed);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn all_accepted() {
        let report = check_words(
            oracle(),
            &GameConfig::default(),
            "Silkworm",
            &words(&["MILK"]),
        )
        .unwrap();
        assert!(report.all_accepted());
        assert_eq!(report.used_words, ["milk"]);
    }

    #[test]
    fn invalid_root_is_an_error() {
        let err = check_words(oracle(), &GameConfig::default(), "  ", &words(&["silk"]))
            .unwrap_err();
        assert!(err.to_string().contains("invalid root word"));
    }

    #[test]
    fn oracle_failure_is_an_error() {
        let config = GameConfig {
            language: "de".to_string(),
            ..GameConfig::default()
        };
        let err = check_words(oracle(), &config, "silkworm", &words(&["silk"])).unwrap_err();
        assert!(err.to_string().contains("failed to check 'silk'"));
    }
}
