//! Round lifecycle and submission handling
//!
//! `Session` is the only thing that mutates round state. Frontends call
//! `start_round`, `submit` and `restart`, and read a `Snapshot` to render.

mod controller;
mod round;

pub use controller::{Session, SessionError, SubmissionOutcome, root_word_pool, start_round};
pub use round::{RoundState, Snapshot};
