//! Word list loading utilities
//!
//! Word lists are whitespace-separated tokens, each exactly five ASCII letters.
//! Anything else is rejected with the position of the offending token.

use crate::core::{Word, WordError};
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or parse a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("entry {index} of {list} is not a valid word")]
    InvalidWord {
        list: String,
        /// 1-based position of the token in the list
        index: usize,
        #[source]
        source: WordError,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::InvalidWord` for the first token that is not a 5-letter word.
///
/// # Examples
/// ```no_run
/// use wordle_letters::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers_tiny.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, &path.display().to_string())?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse whitespace-separated words, naming the list `list` in errors and logs
///
/// Duplicates are kept; they are reported with a warning.
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first token that is not a 5-letter word.
pub fn parse_words(content: &str, list: &str) -> Result<Vec<Word>, LoadError> {
    words_from_tokens(content.split_whitespace(), list)
}

fn words_from_tokens<'t>(
    tokens: impl Iterator<Item = &'t str>,
    list: &str,
) -> Result<Vec<Word>, LoadError> {
    let words = tokens
        .enumerate()
        .map(|(i, token)| {
            Word::new(token).map_err(|source| LoadError::InvalidWord {
                list: list.to_string(),
                index: i + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let duplicates = duplicate_count(&words);
    if duplicates > 0 {
        warn!("{list} contains {duplicates} duplicate words");
    }

    Ok(words)
}

/// Number of entries that repeat an earlier entry
#[must_use]
pub fn duplicate_count(words: &[Word]) -> usize {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    for word in words {
        *seen.entry(word.text()).or_insert(0) += 1;
    }
    seen.values().map(|&n| n - 1).sum()
}

/// Convert embedded string slice to Word vector
///
/// Entries are checked exactly as [`parse_words`] checks file tokens.
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first entry that is not a 5-letter word.
///
/// # Examples
/// ```
/// use wordle_letters::wordlists::loader::words_from_slice;
/// use wordle_letters::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, "answers").unwrap();
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str], list: &str) -> Result<Vec<Word>, LoadError> {
    words_from_tokens(slice.iter().copied(), list)
}
