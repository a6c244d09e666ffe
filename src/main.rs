//! Wordle letter scoring - CLI
//!
//! Ranks first and second Wordle guesses by weighted letter matches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_letters::{
    commands::{RunOptions, run_first_round, run_menu, run_score, run_second_round},
    solver::StrikeMode,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_letters",
    about = "Rank Wordle first and second guesses by weighted letter matches",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list (default: built-in tiny list)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Extra guess word list (default: built-in tiny list)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// How many answer letters each leftover first-word letter strikes
    #[arg(short, long, global = true, value_enum, default_value_t = StrikeMode::FirstMatch)]
    strike: StrikeMode,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Display best first words only
    First,

    /// Display best first and best second words
    Second,

    /// Show the score breakdown and rank of one word
    Score {
        /// Word to score, matched exactly as typed
        word: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let source = WordSource {
        answers: cli.answers,
        guesses: cli.guesses,
    };
    let options = RunOptions {
        strike_mode: cli.strike,
        progress: true,
    };

    // Default to the menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);
    let mut out = io::stdout().lock();

    match command {
        Commands::Menu => run_menu(&mut io::stdin().lock(), &mut out, source, options),
        Commands::First => {
            let lists = source.load().context("failed to load word lists")?;
            run_first_round(&mut out, &lists)
        }
        Commands::Second => {
            let lists = source.load().context("failed to load word lists")?;
            run_second_round(&mut out, &lists, options)
        }
        Commands::Score { word } => {
            let lists = source.load().context("failed to load word lists")?;
            run_score(&mut out, &lists, &word)
        }
    }
}
