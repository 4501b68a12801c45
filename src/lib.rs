//! Word Scramble
//!
//! A word game engine: a round starts from a random root word, and the player
//! scores new words spelled from its letters. Every submission is checked for
//! originality, feasibility against the root's letters, and realness against
//! a pluggable spell oracle.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::config::GameConfig;
//! use word_scramble::oracle::DictionaryOracle;
//! use word_scramble::session::{Session, SubmissionOutcome};
//!
//! let oracle = DictionaryOracle::new("en", ["silk", "worm", "silkworm"]);
//! let pool = vec!["silkworm".to_string()];
//! let mut session = Session::new(oracle, pool, &GameConfig::default()).unwrap();
//!
//! session.start_round().unwrap();
//! let outcome = session.submit("  Silk ").unwrap();
//! assert_eq!(outcome, SubmissionOutcome::Accepted("silk".to_string()));
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Spell-check capability
pub mod oracle;

// Acceptance rules
pub mod validator;

// Round state and submission handling
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
