//! Formatting utilities for terminal output

use crate::session::SubmissionOutcome;

/// Circled letter-count badge shown next to each used word
///
/// Uses the enclosed numerals for 1-20 and falls back to "(n)" beyond that.
#[must_use]
pub fn letter_badge(word: &str) -> String {
    let count = word.chars().count();
    match count {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// One-line plain-text summary of an outcome
///
/// Returns `None` for blank submissions, which get no feedback.
#[must_use]
pub fn outcome_summary(outcome: &SubmissionOutcome) -> Option<String> {
    match outcome {
        SubmissionOutcome::NoOp => None,
        SubmissionOutcome::Accepted(word) => Some(format!("✓ {word}")),
        SubmissionOutcome::Rejected(reason) => Some(format!("✗ {reason}")),
    }
}

/// Used words as a single comma-separated line
#[must_use]
pub fn used_words_line(used_words: &[String]) -> String {
    if used_words.is_empty() {
        "(none yet)".to_string()
    } else {
        used_words.join(", ")
    }
}
