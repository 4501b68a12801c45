//! Reasons a submission can be refused
//!
//! Each rejection carries a short title and a longer message, ready to be
//! shown to the player as an alert.

use std::fmt;

/// Which acceptance rule a submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Already accepted earlier this round
    AlreadyUsed,
    /// Needs letters the root word does not have
    NotPossible,
    /// Just the root word repeated back
    RootWord,
    /// Shorter than the configured minimum
    TooShort,
    /// Not recognized by the spell oracle
    NotReal,
}

impl RejectionKind {
    /// Short machine-friendly name, used in logs and CLI output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "already-used",
            Self::NotPossible => "not-possible",
            Self::RootWord => "root-word",
            Self::TooShort => "too-short",
            Self::NotReal => "not-real",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A refused submission, as surfaced to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionReason {
    pub kind: RejectionKind,
    pub title: String,
    pub message: String,
}

impl RejectionReason {
    fn new(kind: RejectionKind, title: &str, message: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
        }
    }

    #[must_use]
    pub fn already_used() -> Self {
        Self::new(
            RejectionKind::AlreadyUsed,
            "Word used already",
            "Be more original".to_string(),
        )
    }

    #[must_use]
    pub fn not_possible(root_word: &str) -> Self {
        Self::new(
            RejectionKind::NotPossible,
            "Word not possible",
            format!("You can't spell that word from '{root_word}'!"),
        )
    }

    #[must_use]
    pub fn root_word(root_word: &str) -> Self {
        Self::new(
            RejectionKind::RootWord,
            "Word is the root word",
            format!("You can't just repeat '{root_word}'!"),
        )
    }

    #[must_use]
    pub fn too_short(min_length: usize) -> Self {
        Self::new(
            RejectionKind::TooShort,
            "Word too short",
            format!("Words must be at least {min_length} letters long"),
        )
    }

    #[must_use]
    pub fn not_real() -> Self {
        Self::new(
            RejectionKind::NotReal,
            "Word not recognized",
            "You can't just make them up, you know!".to_string(),
        )
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_possible_names_root() {
        let reason = RejectionReason::not_possible("silkworm");
        assert_eq!(reason.kind, RejectionKind::NotPossible);
        assert_eq!(reason.title, "Word not possible");
        assert_eq!(reason.message, "You can't spell that word from 'silkworm'!");
    }

    #[test]
    fn too_short_names_minimum() {
        let reason = RejectionReason::too_short(3);
        assert_eq!(reason.message, "Words must be at least 3 letters long");
    }

    #[test]
    fn display_joins_title_and_message() {
        let reason = RejectionReason::already_used();
        assert_eq!(format!("{reason}"), "Word used already: Be more original");
    }

    #[test]
    fn kind_names() {
        assert_eq!(RejectionKind::AlreadyUsed.to_string(), "already-used");
        assert_eq!(RejectionKind::NotReal.name(), "not-real");
        assert_eq!(RejectionKind::RootWord.name(), "root-word");
    }
}
