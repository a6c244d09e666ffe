//! Word lists for letter scoring
//!
//! Provides the embedded default lists and the combined answers-then-guesses
//! list the scoring engine works on.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
pub use loader::LoadError;

use crate::core::Word;
use loader::{load_from_file, words_from_slice};
use std::path::PathBuf;

/// Where the answer and guess lists come from; `None` means the embedded default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSource {
    pub answers: Option<PathBuf>,
    pub guesses: Option<PathBuf>,
}

impl WordSource {
    /// Both lists read from files
    #[must_use]
    pub fn files(answers: impl Into<PathBuf>, guesses: impl Into<PathBuf>) -> Self {
        Self {
            answers: Some(answers.into()),
            guesses: Some(guesses.into()),
        }
    }

    /// Display name of the answer list
    #[must_use]
    pub fn answers_name(&self) -> String {
        self.answers.as_ref().map_or_else(
            || "answers_tiny.txt (built in)".to_string(),
            |p| p.display().to_string(),
        )
    }

    /// Display name of the guess list
    #[must_use]
    pub fn guesses_name(&self) -> String {
        self.guesses.as_ref().map_or_else(
            || "guesses_tiny.txt (built in)".to_string(),
            |p| p.display().to_string(),
        )
    }

    /// Read both lists
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if either file cannot be read or holds an invalid word.
    pub fn load(&self) -> Result<WordLists, LoadError> {
        let answers = match &self.answers {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ANSWERS, &self.answers_name())?,
        };
        let guesses = match &self.guesses {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(GUESSES, &self.guesses_name())?,
        };

        Ok(WordLists::combine(
            self.answers_name(),
            self.guesses_name(),
            answers,
            guesses,
        ))
    }
}

/// Answers followed by guesses, as one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    pub answers_name: String,
    pub guesses_name: String,
    pub answer_count: usize,
    pub guess_count: usize,
    pub words: Vec<Word>,
}

impl WordLists {
    #[must_use]
    pub fn combine(
        answers_name: String,
        guesses_name: String,
        answers: Vec<Word>,
        guesses: Vec<Word>,
    ) -> Self {
        let answer_count = answers.len();
        let guess_count = guesses.len();
        let mut words = answers;
        words.extend(guesses);

        Self {
            answers_name,
            guesses_name,
            answer_count,
            guess_count,
            words,
        }
    }
}
