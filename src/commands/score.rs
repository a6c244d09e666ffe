//! Single word score command
//!
//! Shows how one word scores against the answers and where it ranks.

use crate::core::Word;
use crate::output::write_word_score;
use crate::solver::ScoringEngine;
use crate::wordlists::WordLists;
use anyhow::{Context, Result};
use std::io::Write;

/// Score `text` against the answers and write its breakdown
///
/// The word is matched exactly as typed; it does not need to be in either list.
///
/// # Errors
///
/// Returns an error if `text` is not a 5-letter word, the lists have no
/// answers, or the output cannot be written.
pub fn run_score(out: &mut impl Write, lists: &WordLists, text: &str) -> Result<()> {
    let word = Word::new(text).with_context(|| format!("cannot score {text:?}"))?;
    let engine = ScoringEngine::new(&lists.words, lists.answer_count)?;
    let result = engine.score_of(&word);

    write_word_score(out, &word, &result, lists)?;
    if !lists.words.contains(&word) {
        writeln!(out, "   ({word} is not in either word list)")?;
    }
    Ok(())
}
