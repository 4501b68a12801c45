//! Core domain types for the word game
//!
//! Pure value types with no I/O: the root word, letter multisets used for
//! spelling checks, and the reasons a submission can be refused.

mod letters;
mod rejection;
mod word;

pub use letters::LetterCounts;
pub use rejection::{RejectionKind, RejectionReason};
pub use word::{RootWord, RootWordError, normalize};
