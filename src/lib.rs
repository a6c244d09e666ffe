//! Wordle letter scoring
//!
//! Ranks Wordle guesses by weighted letter matches against a list of possible
//! answers: 3 points for a letter in the right place, 1 point for a letter
//! found elsewhere. A second-round mode strikes the letters a first guess
//! accounts for and ranks the best words to follow it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_letters::core::Word;
//! use wordle_letters::solver::ScoringEngine;
//!
//! // Answers first, then extra guesses
//! let words: Vec<Word> = ["CRANE", "TOWER", "XXXXX"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let engine = ScoringEngine::new(&words, 2).unwrap();
//! let best = engine.first_round();
//! assert_eq!(best.top[0].word.text(), "CRANE");
//! assert_eq!(best.top[0].score, 17);
//! ```

// Core domain types
pub mod core;

// Scoring algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
