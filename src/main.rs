//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell new words from the letters of a
//! random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, run_simple},
    config::{DEFAULT_MIN_WORD_LENGTH, GameConfig},
    interactive::{App, run_tui},
    oracle::{DEFAULT_LANGUAGE, DictionaryOracle},
    output::print_check_report,
    session::Session,
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word pool: 'start' (default, embedded list) or path to file
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "start",
        env = "WORD_SCRAMBLE_WORDLIST"
    )]
    wordlist: String,

    /// Dictionary for recognizing real words: 'builtin' (default) or path to file
    #[arg(
        short = 'd',
        long,
        global = true,
        default_value = "builtin",
        env = "WORD_SCRAMBLE_DICTIONARY"
    )]
    dictionary: String,

    /// Language tag passed to the spell oracle
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE, env = "WORD_SCRAMBLE_LANGUAGE")]
    language: String,

    /// Shortest word accepted
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MIN_WORD_LENGTH,
        env = "WORD_SCRAMBLE_MIN_LENGTH"
    )]
    min_length: usize,

    /// Root word to use if the word pool turns out empty (otherwise that is an error)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_FALLBACK_ROOT")]
    fallback_root: Option<String>,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check words against a given root word
    Check {
        /// The root word to spell from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            language: self.language.clone(),
            min_word_length: self.min_length,
            fallback_root: self.fallback_root.clone(),
            seed: self.seed,
        }
    }
}

/// Load the root word pool based on the -w flag
fn load_word_pool(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "start" => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path).context("could not load the root word pool"),
    }
}

/// Build the spell oracle based on the -d flag
///
/// The built-in dictionary is English; a dictionary file answers for the
/// configured language.
fn load_oracle(dictionary: &str, language: &str) -> Result<DictionaryOracle> {
    match dictionary {
        "builtin" => Ok(DictionaryOracle::builtin()),
        path => DictionaryOracle::from_file(language, path).context("could not load the dictionary"),
    }
}

fn init_tracing() {
    // RUST_LOG wins; stderr keeps log lines out of the TUI's alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_scramble=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.game_config();
    let oracle = load_oracle(&cli.dictionary, &config.language)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = new_session(oracle, &cli.wordlist, &config)?;
            run_tui(App::new(session))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Simple => {
            let mut session = new_session(oracle, &cli.wordlist, &config)?;
            run_simple(&mut session)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { root, words } => run_check_command(oracle, &config, &root, &words),
    }
}

fn new_session(
    oracle: DictionaryOracle,
    wordlist: &str,
    config: &GameConfig,
) -> Result<Session<DictionaryOracle>> {
    let pool = load_word_pool(wordlist)?;
    let mut session = Session::new(oracle, pool, config)?;
    session
        .start_round()
        .context("could not start the first round")?;
    Ok(session)
}

fn run_check_command(
    oracle: DictionaryOracle,
    config: &GameConfig,
    root: &str,
    words: &[String],
) -> Result<ExitCode> {
    let report = check_words(oracle, config, root, words)?;
    match print_check_report(&report) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
        result => result.context("failed to write the report")?,
    }

    if report.all_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Rejections are a normal result, but scripts want a non-zero status
        Ok(ExitCode::from(2))
    }
}
