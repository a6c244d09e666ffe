//! Letter-match scoring algorithms
//!
//! This module contains the matcher, the scorer, the ranker and the letter
//! removal used for second-round analysis.

mod engine;
mod matcher;
mod ranker;
mod removal;
mod scorer;

#[cfg(test)]
mod properties;

pub use engine::{
    EngineError, FirstRoundReport, ScoringEngine, SecondRoundEntry, SecondRoundReport, WordScore,
};
pub use matcher::{MatchCounts, OTHER_POINTS, POSITIONAL_POINTS, match_letters};
pub use ranker::{rank, top_group};
pub use removal::{StrikeMode, strike_letters};
pub use scorer::{AnswerPool, ScoredWord, breakdown, score_word, score_words};
