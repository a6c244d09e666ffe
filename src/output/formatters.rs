//! Formatting utilities for terminal output
//!
//! Plain text only; colouring is applied by the display functions.

use crate::solver::ScoredWord;
use crate::wordlists::WordLists;

/// `WORD SCORE`
#[must_use]
pub fn scored_line(word: &ScoredWord<'_>) -> String {
    format!("{} {}", word.word, word.score)
}

/// Second-round words on one line, each indented by three spaces
#[must_use]
pub fn followup_line(followups: &[ScoredWord<'_>]) -> String {
    followups
        .iter()
        .map(|w| format!("   {}", scored_line(w)))
        .collect()
}

/// The "<list> has N words" lines for both lists
#[must_use]
pub fn list_sizes(lists: &WordLists) -> String {
    format!(
        "{} has {} words\n{} has {} words\n",
        lists.answers_name, lists.answer_count, lists.guesses_name, lists.guess_count
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A word's score as a bar relative to the best score
#[must_use]
pub fn score_bar(score: u32, top_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(top_score), width)
}
