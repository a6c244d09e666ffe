//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{write_first_round, write_list_sizes, write_second_round, write_word_score};
