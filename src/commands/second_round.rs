//! Best first and second words command
//!
//! Runs one full scoring pass per top first word, so large top groups get a
//! progress bar.

use super::RunOptions;
use crate::output::{write_list_sizes, write_second_round};
use crate::solver::ScoringEngine;
use crate::wordlists::WordLists;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::io::Write;

/// Top groups smaller than this finish too quickly to need a progress bar
pub const PROGRESS_THRESHOLD: usize = 4;

/// Score first words, then score second words after each top first word
///
/// # Errors
///
/// Returns an error if the lists cannot be scored (no answers) or the output
/// cannot be written.
pub fn run_second_round(
    out: &mut impl Write,
    lists: &WordLists,
    options: RunOptions,
) -> Result<()> {
    let engine = ScoringEngine::new(&lists.words, lists.answer_count)?
        .with_strike_mode(options.strike_mode);
    let first_round = engine.first_round();
    info!(
        "analysing second words for {} first words ({} strike)",
        first_round.top.len(),
        engine.strike_mode()
    );

    let pb = if options.progress && first_round.top.len() >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(first_round.top.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let report = engine.second_round_from(&first_round, |entry| {
        pb.set_message(entry.first.word.text().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    write_list_sizes(out, lists)?;
    write_second_round(out, &report)?;
    Ok(())
}
