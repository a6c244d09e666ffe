//! Scoring words against an answer pool
//!
//! A word's score is the sum of its match points against every answer in the
//! pool. Each (word, answer) pair is matched on a fresh copy, so no state
//! leaks from one pair to the next.

use super::matcher::{MatchCounts, match_letters};
use super::removal::{StrikeMode, strike_letters};
use crate::core::{Slots, Word};

/// A word paired with its latest score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: u32,
}

impl<'a> ScoredWord<'a> {
    /// Wrap a word with a zero score; scores mean nothing until a pass runs
    #[must_use]
    pub const fn unscored(word: &'a Word) -> Self {
        Self { word, score: 0 }
    }
}

/// Working answers for one scoring round
///
/// Built from canonical answer words and never written back to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerPool {
    answers: Vec<Slots>,
}

impl AnswerPool {
    /// Pool holding every letter of every answer
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            answers: words.iter().map(Slots::from).collect(),
        }
    }

    /// Pool taken from the first `answer_count` entries of a combined list
    ///
    /// Combined lists hold answers first, then the extra guesses.
    ///
    /// # Panics
    /// Panics if `answer_count` exceeds `words.len()`
    #[must_use]
    pub fn derive(words: &[Word], answer_count: usize) -> Self {
        Self::from_words(&words[..answer_count])
    }

    /// A copy of this pool with the letters `guess` accounts for struck out
    #[must_use]
    pub fn struck_by(&self, guess: &Word, mode: StrikeMode) -> Self {
        let mut answers = self.answers.clone();
        for answer in &mut answers {
            strike_letters(guess, answer, mode);
        }
        Self { answers }
    }

    /// Working answers in pool order
    #[must_use]
    pub fn answers(&self) -> &[Slots] {
        &self.answers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Summed hit counts of `word` against every answer in `pool`
#[must_use]
pub fn breakdown(word: &Word, pool: &AnswerPool) -> MatchCounts {
    let mut total = MatchCounts::default();
    for &answer in pool.answers() {
        let mut working = answer;
        total += match_letters(word, &mut working);
    }
    total
}

/// Score of `word` against every answer in `pool`
#[must_use]
pub fn score_word(word: &Word, pool: &AnswerPool) -> u32 {
    breakdown(word, pool).points()
}

/// Recompute the score of every word against `pool`
pub fn score_words(words: &mut [ScoredWord<'_>], pool: &AnswerPool) {
    for scored in words.iter_mut() {
        scored.score = score_word(scored.word, pool);
    }
}
