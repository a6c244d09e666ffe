//! Best first words command

use crate::output::{write_first_round, write_list_sizes};
use crate::solver::ScoringEngine;
use crate::wordlists::WordLists;
use anyhow::Result;
use log::info;
use std::io::Write;

/// Score every word against the answers and write the top group
///
/// # Errors
///
/// Returns an error if the lists cannot be scored (no answers) or the output
/// cannot be written.
pub fn run_first_round(out: &mut impl Write, lists: &WordLists) -> Result<()> {
    let engine = ScoringEngine::new(&lists.words, lists.answer_count)?;
    let report = engine.first_round();
    info!(
        "{} words tied for best first word at {}",
        report.top.len(),
        report.top[0].score
    );

    write_list_sizes(out, lists)?;
    write_first_round(out, &report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn writes_sizes_then_top_words() {
        let lists = WordLists::combine(
            "a.txt".into(),
            "g.txt".into(),
            words_from_slice(&["ABIDE", "BUDGE"], "test").unwrap(),
            words_from_slice(&["XXXXX"], "test").unwrap(),
        );
        let mut out = Vec::new();

        run_first_round(&mut out, &lists).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("a.txt has 2 words\ng.txt has 1 words\n\n"));
        assert!(text.ends_with("ABIDE 20\nBUDGE 20\n"));
    }

    #[test]
    fn empty_answer_list_is_an_error() {
        let lists = WordLists::combine(
            "a.txt".into(),
            "g.txt".into(),
            Vec::new(),
            words_from_slice(&["CRANE"], "test").unwrap(),
        );
        let mut out = Vec::new();

        let err = run_first_round(&mut out, &lists).unwrap_err();
        assert_eq!(err.to_string(), "at least one answer word is required");
        assert!(out.is_empty());
    }
}
