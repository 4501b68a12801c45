//! Session controller
//!
//! Picks root words, feeds submissions through the validator, and records
//! accepted words.

use super::round::{RoundState, Snapshot};
use crate::config::GameConfig;
use crate::core::{RejectionReason, RootWord, RootWordError};
use crate::oracle::{OracleError, SpellOracle};
use crate::validator::{ValidationRules, Verdict, validate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from starting rounds or handling submissions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("word pool is empty, there is no root word to start a round with")]
    EmptyWordPool,
    #[error("invalid root word: {0}")]
    InvalidRootWord(#[from] RootWordError),
    #[error("no round in progress")]
    NoActiveRound,
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Blank input, ignored without feedback
    NoOp,
    /// Added to the front of the used words
    Accepted(String),
    /// Refused; round state unchanged
    Rejected(RejectionReason),
}

/// Turn raw pool entries into root words
///
/// Entries that are not a single word (blank lines, phrases like
/// "ice cream") are skipped with a warning, so every later pick is usable.
#[must_use]
pub fn root_word_pool<I, S>(entries: I) -> Vec<RootWord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| match RootWord::new(entry.as_ref()) {
            Ok(root_word) => Some(root_word),
            Err(err) => {
                warn!(entry = %entry.as_ref(), error = %err, "skipping unusable word pool entry");
                None
            }
        })
        .collect()
}

/// Pick a root word uniformly at random from `word_pool`
///
/// # Errors
/// Returns `SessionError::EmptyWordPool` if the pool has no entries.
pub fn start_round<R: Rng + ?Sized>(
    word_pool: &[RootWord],
    rng: &mut R,
) -> Result<RootWord, SessionError> {
    word_pool
        .choose(rng)
        .cloned()
        .ok_or(SessionError::EmptyWordPool)
}

/// One player's game: word pool, oracle, rules and the current round
pub struct Session<O> {
    oracle: O,
    word_pool: Vec<RootWord>,
    rules: ValidationRules,
    fallback_root: Option<RootWord>,
    rng: StdRng,
    round: Option<RoundState>,
}

impl<O: SpellOracle> Session<O> {
    /// Create a session awaiting its first round
    ///
    /// Pool entries go through [`root_word_pool`]; unusable ones are dropped.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidRootWord` if the configured fallback root
    /// word is unusable.
    pub fn new(oracle: O, word_pool: Vec<String>, config: &GameConfig) -> Result<Self, SessionError> {
        let fallback_root = config
            .fallback_root
            .as_deref()
            .map(RootWord::new)
            .transpose()?;
        let word_pool = root_word_pool(word_pool);

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        debug!(
            pool_size = word_pool.len(),
            min_word_length = config.min_word_length,
            language = %config.language,
            "session created"
        );

        Ok(Self {
            oracle,
            word_pool,
            rules: config.rules(),
            fallback_root,
            rng,
            round: None,
        })
    }

    /// Start a round with a random root word from the pool
    ///
    /// An empty pool falls back to the configured fallback root word, if any.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordPool` if the pool is empty and no
    /// fallback is configured.
    pub fn start_round(&mut self) -> Result<&RootWord, SessionError> {
        let root_word = match start_round(&self.word_pool, &mut self.rng) {
            Ok(root_word) => root_word,
            Err(err) => match &self.fallback_root {
                Some(fallback) => {
                    warn!(fallback = %fallback, "word pool is empty, using fallback root word");
                    fallback.clone()
                }
                None => return Err(err),
            },
        };

        Ok(self.start_round_with(root_word))
    }

    /// Start a round with a specific root word
    pub fn start_round_with(&mut self, root_word: RootWord) -> &RootWord {
        info!(root_word = %root_word, "round started");
        self.round.insert(RoundState::new(root_word)).root_word()
    }

    /// Abandon the current round and start a new one
    ///
    /// On failure the previous round, if any, is kept.
    ///
    /// # Errors
    /// Same as [`Session::start_round`].
    pub fn restart(&mut self) -> Result<&RootWord, SessionError> {
        if let Some(round) = &self.round {
            debug!(
                root_word = %round.root_word(),
                used_words = round.used_words().len(),
                "restarting round"
            );
        }
        self.start_round()
    }

    /// Validate a raw submission and record it if accepted
    ///
    /// # Errors
    /// Returns `SessionError::NoActiveRound` before the first round, and
    /// `SessionError::Oracle` if the spell oracle cannot answer. Neither
    /// changes round state.
    pub fn submit(&mut self, raw: &str) -> Result<SubmissionOutcome, SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;

        let verdict = validate(
            raw,
            round.root_word(),
            round.used_words(),
            &self.oracle,
            &self.rules,
        )
        .inspect_err(|err| warn!(error = %err, "spell oracle failed"))?;

        let outcome = match verdict {
            Verdict::Empty => SubmissionOutcome::NoOp,
            Verdict::Accepted(word) => {
                debug!(word = %word, "submission accepted");
                round.accept(word.clone());
                SubmissionOutcome::Accepted(word)
            }
            Verdict::Rejected(reason) => {
                debug!(raw = %raw.trim(), kind = %reason.kind, "submission rejected");
                SubmissionOutcome::Rejected(reason)
            }
        };

        Ok(outcome)
    }
}

impl<O> Session<O> {
    /// Current round for rendering, `None` before the first round
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.round.as_ref().map(RoundState::snapshot)
    }

    #[must_use]
    pub const fn is_in_round(&self) -> bool {
        self.round.is_some()
    }

}
