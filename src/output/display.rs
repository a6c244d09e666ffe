//! Display functions for command results
//!
//! Each report is written to any `Write`, so the same code serves stdout, the
//! interactive menu and the tests.

use super::formatters::{followup_line, list_sizes, score_bar, scored_line};
use crate::core::Word;
use crate::solver::{
    FirstRoundReport, OTHER_POINTS, POSITIONAL_POINTS, SecondRoundReport, WordScore,
};
use crate::wordlists::WordLists;
use colored::Colorize;
use std::io::{self, Write};

/// Write the size of both word lists
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_list_sizes(out: &mut impl Write, lists: &WordLists) -> io::Result<()> {
    writeln!(out, "{}", list_sizes(lists))
}

/// Write the best first words
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_first_round(out: &mut impl Write, report: &FirstRoundReport<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Words and scores for top first words:".bright_cyan().bold()
    )?;
    for word in &report.top {
        writeln!(out, "{}", scored_line(word))?;
    }
    Ok(())
}

/// Write each best first word followed by its best second words
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_second_round(out: &mut impl Write, report: &SecondRoundReport<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Words and scores for top first words and second words:"
            .bright_cyan()
            .bold()
    )?;
    for entry in &report.entries {
        writeln!(out, "{}", scored_line(&entry.first))?;
        writeln!(out, "{}", followup_line(&entry.followups))?;
    }
    Ok(())
}

/// Write the score breakdown of one word
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_word_score(
    out: &mut impl Write,
    word: &Word,
    result: &WordScore,
    lists: &WordLists,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "LETTER SCORE:".bright_cyan().bold(),
        word.text().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let bar = score_bar(result.score, result.top_score, 30);

    writeln!(out, "\nAgainst {} possible answers:", lists.answer_count)?;
    writeln!(
        out,
        "   Score:       [{}] {} (best {})",
        bar.green(),
        result.score,
        result.top_score
    )?;
    writeln!(
        out,
        "   In place:    {} x {POSITIONAL_POINTS}",
        result.counts.positional
    )?;
    writeln!(
        out,
        "   Elsewhere:   {} x {OTHER_POINTS}",
        result.counts.other
    )?;
    writeln!(
        out,
        "   Rank:        {} of {}",
        result.rank,
        lists.words.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ScoringEngine;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::combine(
            "answers.txt".into(),
            "guesses.txt".into(),
            words_from_slice(&["CRANE", "TOWER"], "test").unwrap(),
            words_from_slice(&["XXXXX"], "test").unwrap(),
        )
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn first_round_lists_each_top_word() {
        let lists = lists();
        let engine = ScoringEngine::new(&lists.words, lists.answer_count).unwrap();
        let text = render(|out| write_first_round(out, &engine.first_round()));

        assert!(text.contains("top first words:"));
        assert!(text.contains("\nCRANE 17\nTOWER 17\n"));
        assert!(!text.contains("XXXXX"));
    }

    #[test]
    fn second_round_pairs_first_and_second_words() {
        let lists = lists();
        let engine = ScoringEngine::new(&lists.words, lists.answer_count).unwrap();
        let text = render(|out| write_second_round(out, &engine.second_round()));

        assert!(text.contains("top first words and second words:"));
        assert!(text.contains("\nCRANE 17\n   TOWER 9\nTOWER 17\n   CRANE 9\n"));
    }

    #[test]
    fn list_sizes_end_with_blank_line() {
        let text = render(|out| write_list_sizes(out, &lists()));
        assert_eq!(text, "answers.txt has 2 words\nguesses.txt has 1 words\n\n");
    }

    #[test]
    fn word_score_shows_breakdown() {
        let lists = lists();
        let engine = ScoringEngine::new(&lists.words, lists.answer_count).unwrap();
        let word = Word::new("TRACE").unwrap();
        let result = engine.score_of(&word);
        let text = render(|out| write_word_score(out, &word, &result, &lists));

        assert!(text.contains("Against 2 possible answers:"));
        assert!(text.contains("15 (best 17)"));
        assert!(text.contains("In place:    4 x 3"));
        assert!(text.contains("Elsewhere:   3 x 1"));
        assert!(text.contains("Rank:        3 of 3"));
    }
}
