//! Interactive menu mode
//!
//! Text menu for choosing a report and changing the word list files.

use super::{RunOptions, run_first_round, run_second_round};
use crate::solver::EngineError;
use crate::wordlists::WordSource;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Menu choices, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    FirstWords,
    FirstAndSecondWords,
    ChangeFiles,
    Exit,
    /// Unlisted; large lists are not built in
    LargeLists,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::FirstWords),
            "2" => Some(Self::FirstAndSecondWords),
            "3" => Some(Self::ChangeFiles),
            "4" => Some(Self::Exit),
            "5" => Some(Self::LargeLists),
            _ => None,
        }
    }
}

/// Run the interactive menu until a report is shown, the user exits, or input ends
///
/// Word lists are loaded fresh for each report, so a file name change takes
/// effect on the next one. Load failures and lists that cannot be scored are
/// reported and the menu is shown again.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    mut source: WordSource,
    options: RunOptions,
) -> Result<()> {
    writeln!(
        out,
        "Default file names are {} and {}",
        source.answers_name(),
        source.guesses_name()
    )?;

    loop {
        write_menu(out)?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        let Some(choice) = Choice::parse(&line) else {
            writeln!(out, "Unknown option {:?}", line.trim())?;
            continue;
        };

        match choice {
            Choice::FirstWords | Choice::FirstAndSecondWords => {
                let lists = match source.load() {
                    Ok(lists) => lists,
                    Err(err) => {
                        writeln!(out, "Error: {:#}", anyhow::Error::new(err))?;
                        continue;
                    }
                };

                let result = if choice == Choice::FirstWords {
                    run_first_round(out, &lists)
                } else {
                    run_second_round(out, &lists, options)
                };
                match result {
                    Ok(()) => {
                        writeln!(out, "Done")?;
                        return Ok(());
                    }
                    Err(err) if err.is::<EngineError>() => {
                        writeln!(out, "Error: {err:#}")?;
                    }
                    Err(err) => return Err(err),
                }
            }
            Choice::ChangeFiles => {
                write!(out, "Enter new answers and guesses filenames: ")?;
                out.flush()?;

                let Some([answers, guesses]) = read_two_names(input)? else {
                    return Ok(());
                };
                source = WordSource::files(answers, guesses);
                writeln!(
                    out,
                    "File names are now {} and {}",
                    source.answers_name(),
                    source.guesses_name()
                )?;
            }
            Choice::Exit => return Ok(()),
            Choice::LargeLists => {
                writeln!(
                    out,
                    "Large word lists are not built in; use option 3 to load them from files"
                )?;
            }
        }
    }
}

fn write_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Menu Options:")?;
    writeln!(out, "  1. Display best first words only")?;
    writeln!(out, "  2. Display best first and best second words")?;
    writeln!(out, "  3. Change answers and guesses filenames")?;
    writeln!(out, "  4. Exit")?;
    write!(out, "Your choice: ")?;
    out.flush()?;
    Ok(())
}

/// Next line of input, or `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Two whitespace-separated names, read across as many lines as needed
fn read_two_names(input: &mut impl BufRead) -> Result<Option<[String; 2]>> {
    let mut names: Vec<String> = Vec::with_capacity(2);
    while names.len() < 2 {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        names.extend(line.split_whitespace().map(str::to_string));
    }
    names.truncate(2);

    let mut names = names.into_iter();
    match (names.next(), names.next()) {
        (Some(answers), Some(guesses)) => Ok(Some([answers, guesses])),
        _ => Ok(None),
    }
}
