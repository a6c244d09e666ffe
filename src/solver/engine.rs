//! Main scoring interface
//!
//! Ties the matcher, scorer, ranker and letter removal together into the two
//! analyses the tool offers: best first words, and best first and second words.

use super::matcher::MatchCounts;
use super::ranker::{rank, top_group};
use super::removal::StrikeMode;
use super::scorer::{AnswerPool, ScoredWord, breakdown, score_words};
use crate::core::Word;
use log::debug;
use thiserror::Error;

/// Invalid input to [`ScoringEngine::new`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no words to score")]
    NoWords,
    #[error("at least one answer word is required")]
    NoAnswers,
    #[error("answer count {answer_count} exceeds word count {word_count}")]
    TooManyAnswers {
        answer_count: usize,
        word_count: usize,
    },
}

/// Top first words after one scoring pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstRoundReport<'a> {
    pub answer_count: usize,
    pub word_count: usize,
    pub top: Vec<ScoredWord<'a>>,
}

/// One first word and the best words to follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondRoundEntry<'a> {
    pub first: ScoredWord<'a>,
    pub followups: Vec<ScoredWord<'a>>,
}

/// Second-round analysis for every top first word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondRoundReport<'a> {
    pub entries: Vec<SecondRoundEntry<'a>>,
}

/// Score and standing of a single word against the answer pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScore {
    pub counts: MatchCounts,
    pub score: u32,
    /// 1-based; tied words share a rank
    pub rank: usize,
    pub top_score: u32,
}

/// Letter-match scoring over a combined word list
///
/// The list holds the answers first, then any extra guesses. Every word in it
/// is scored; only the leading `answer_count` words form the answer pool.
pub struct ScoringEngine<'a> {
    words: &'a [Word],
    answer_count: usize,
    pool: AnswerPool,
    strike_mode: StrikeMode,
}

impl<'a> ScoringEngine<'a> {
    /// Create an engine over `words`, whose first `answer_count` entries are answers
    ///
    /// # Errors
    /// Returns `EngineError` if the list is empty, there are no answers, or
    /// there are more answers than words.
    pub fn new(words: &'a [Word], answer_count: usize) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::NoWords);
        }
        if answer_count == 0 {
            return Err(EngineError::NoAnswers);
        }
        if answer_count > words.len() {
            return Err(EngineError::TooManyAnswers {
                answer_count,
                word_count: words.len(),
            });
        }

        Ok(Self {
            words,
            answer_count,
            pool: AnswerPool::derive(words, answer_count),
            strike_mode: StrikeMode::default(),
        })
    }

    /// Use `mode` when striking first-word letters out of the answers
    #[must_use]
    pub fn with_strike_mode(mut self, mode: StrikeMode) -> Self {
        self.strike_mode = mode;
        self
    }

    #[must_use]
    pub const fn strike_mode(&self) -> StrikeMode {
        self.strike_mode
    }

    /// Every word scored against `pool` and ranked
    fn ranked(&self, pool: &AnswerPool) -> Vec<ScoredWord<'a>> {
        let mut scored: Vec<ScoredWord<'a>> =
            self.words.iter().map(ScoredWord::unscored).collect();
        score_words(&mut scored, pool);
        rank(&mut scored);

        debug!(
            "scored {} words against {} answers, best {}",
            scored.len(),
            pool.len(),
            scored.first().map_or(0, |w| w.score)
        );
        scored
    }

    /// Best first words: the top group against the full answer pool
    #[must_use]
    pub fn first_round(&self) -> FirstRoundReport<'a> {
        let ranked = self.ranked(&self.pool);

        FirstRoundReport {
            answer_count: self.answer_count,
            word_count: self.words.len(),
            top: top_group(&ranked).to_vec(),
        }
    }

    /// Best words to follow `first`
    ///
    /// Scores every word against a fresh copy of the answer pool with the
    /// letters `first` accounts for struck out.
    #[must_use]
    pub fn second_round_for(&self, first: &Word) -> Vec<ScoredWord<'a>> {
        let struck = self.pool.struck_by(first, self.strike_mode);
        debug!("second round after {first} ({} strike)", self.strike_mode);

        let ranked = self.ranked(&struck);
        top_group(&ranked).to_vec()
    }

    /// Second-round analysis for each word of a first-round top group
    ///
    /// `on_entry` is called after each first word has been analysed.
    pub fn second_round_from(
        &self,
        first_round: &FirstRoundReport<'a>,
        mut on_entry: impl FnMut(&SecondRoundEntry<'a>),
    ) -> SecondRoundReport<'a> {
        let entries = first_round
            .top
            .iter()
            .map(|&first| {
                let entry = SecondRoundEntry {
                    first,
                    followups: self.second_round_for(first.word),
                };
                on_entry(&entry);
                entry
            })
            .collect();

        SecondRoundReport { entries }
    }

    /// Best first words, each with the best second words to follow it
    #[must_use]
    pub fn second_round(&self) -> SecondRoundReport<'a> {
        self.second_round_from(&self.first_round(), |_| {})
    }

    /// Score, hit counts and rank of any word against the answer pool
    ///
    /// The word does not need to be in the engine's list.
    #[must_use]
    pub fn score_of(&self, word: &Word) -> WordScore {
        let counts = breakdown(word, &self.pool);
        let score = counts.points();
        let ranked = self.ranked(&self.pool);

        WordScore {
            counts,
            score,
            rank: 1 + ranked.iter().filter(|w| w.score > score).count(),
            top_score: ranked.first().map_or(0, |w| w.score),
        }
    }
}
