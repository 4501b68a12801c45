//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one submission per line.

use crate::oracle::SpellOracle;
use crate::output::{write_outcome, write_round_header, write_used_words};
use crate::session::{Session, SubmissionOutcome};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if a round cannot be started or there's an I/O error
/// reading user input. Spell oracle failures are reported and play goes on.
pub fn run_simple<O: SpellOracle>(session: &mut Session<O>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// Lines starting with ':' are commands (`:new`, `:words`, `:quit`);
/// everything else is submitted as a word. End of input quits.
///
/// # Errors
///
/// Same as [`run_simple`].
pub fn run_simple_with<O, R, W>(session: &mut Session<O>, mut input: R, mut out: W) -> Result<()>
where
    O: SpellOracle,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Word Scramble - Simple Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Spell new words using only the letters of the root word.")?;
    writeln!(out, "Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit\n")?;

    if !session.is_in_round() {
        session.start_round().context("could not start a round")?;
    }
    if let Some(snapshot) = session.snapshot() {
        write_round_header(&mut out, snapshot.root_word)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "Your word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                let root_word = session.restart().context("could not start a new round")?;
                writeln!(out, "\n🔄 New word!")?;
                write_round_header(&mut out, root_word)?;
            }
            ":words" | ":w" => {
                if let Some(snapshot) = session.snapshot() {
                    write_used_words(&mut out, snapshot.used_words)?;
                }
            }
            raw => {
                let outcome = match session.submit(raw) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        writeln!(out, "✗ {err}")?;
                        continue;
                    }
                };
                write_outcome(&mut out, &outcome)?;
                if matches!(outcome, SubmissionOutcome::Accepted(_))
                    && let Some(snapshot) = session.snapshot()
                {
                    writeln!(out, "  {} words so far", snapshot.used_words.len())?;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::oracle::DictionaryOracle;
    use std::io::Cursor;

    fn session() -> Session<DictionaryOracle> {
        let oracle = DictionaryOracle::new("en", ["silk", "worm", "milk"]);
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        Session::new(oracle, vec!["silkworm".to_string()], &config).unwrap()
    }

    fn play(session: &mut Session<DictionaryOracle>, script: &str) -> String {
        let mut out = Vec::new();
        run_simple_with(session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_until_quit() {
        let mut session = session();
        let text = play(&mut session, "silk\nworm\n:quit\nmilk\n");

        assert!(text.contains("SILKWORM"));
        assert!(text.contains("Thanks for playing"));
        // milk came after :quit
        assert_eq!(session.snapshot().unwrap().used_words, ["worm", "silk"]);
    }

    #[test]
    fn reports_rejections() {
        let mut session = session();
        let text = play(&mut session, "silk\nsilk\nsilkkk\n");

        assert!(text.contains("Word used already"));
        assert!(text.contains("Word not possible"));
        assert_eq!(session.snapshot().unwrap().used_words, ["silk"]);
    }

    #[test]
    fn end_of_input_quits() {
        let mut session = session();
        let text = play(&mut session, "");
        assert!(text.contains("Thanks for playing"));
        assert!(session.is_in_round());
    }

    #[test]
    fn new_command_restarts() {
        let mut session = session();
        let text = play(&mut session, "silk\n:new\n");

        assert!(text.contains("New word!"));
        assert!(session.snapshot().unwrap().used_words.is_empty());
    }

    #[test]
    fn blank_lines_ignored() {
        let mut session = session();
        play(&mut session, "\n   \nmilk\n");
        assert_eq!(session.snapshot().unwrap().used_words, ["milk"]);
    }

    #[test]
    fn oracle_failure_keeps_playing() {
        let oracle = DictionaryOracle::new("en", ["silk"]);
        let config = GameConfig {
            language: "de".to_string(),
            seed: Some(3),
            ..GameConfig::default()
        };
        let mut session = Session::new(oracle, vec!["silkworm".to_string()], &config).unwrap();

        let text = play(&mut session, "silk\n:words\n:quit\n");
        assert!(text.contains("not supported"));
        assert!(text.contains("Thanks for playing"));
        assert!(session.snapshot().unwrap().used_words.is_empty());
    }

    #[test]
    fn empty_pool_fails_to_start() {
        let oracle = DictionaryOracle::new("en", ["silk"]);
        let mut session = Session::new(oracle, Vec::new(), &GameConfig::default()).unwrap();

        let mut out = Vec::new();
        let err = run_simple_with(&mut session, Cursor::new(String::new()), &mut out).unwrap_err();
        assert!(err.to_string().contains("could not start a round"));
    }
}
