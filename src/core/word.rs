//! Wordle word representation
//!
//! A Word stores a 5-letter word exactly as it was read. No case folding is
//! performed: `CRANE` and `crane` are different words to the scorer.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Immutable once built. Two equal words may still appear as separate entries
/// in a word list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word {0:?} must contain only ASCII letters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_letters::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
