//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for unreadable word lists
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split newline-delimited text into normalized words
///
/// Each non-empty trimmed line becomes one lowercase entry.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Silkworm\n\n  baseball \n");
/// assert_eq!(words, vec!["silkworm", "baseball"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&content))
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("silkworm\n\n   \nbaseball\n");
        assert_eq!(words, vec!["silkworm", "baseball"]);
    }

    #[test]
    fn parse_handles_crlf() {
        let words = parse_word_list("silkworm\r\nbaseball\r\n");
        assert_eq!(words, vec!["silkworm", "baseball"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["Silkworm", " ", "baseball "]);
        assert_eq!(words, vec!["silkworm", "baseball"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "silkworm\nBASEBALL\n\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["silkworm", "baseball"]);
    }

    #[test]
    fn load_from_missing_file_names_path() {
        let err = load_from_file("/nonexistent/start.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/start.txt"));
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let words = words_from_slice(START_WORDS);
        assert_eq!(words.len(), START_WORDS.len());
    }
}
