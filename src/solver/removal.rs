//! Letter removal for second-round analysis
//!
//! After a first guess, the letters it would reveal are no longer informative.
//! Striking them out of every answer leaves a reduced pool that the next guess
//! is scored against.

use crate::core::{Slots, WORD_LENGTH, Word};
use std::fmt;

/// How many answer letters one remaining guess letter strikes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StrikeMode {
    /// Strike the first open matching answer letter only
    #[default]
    #[value(name = "first")]
    FirstMatch,
    /// Strike every open matching answer letter
    #[value(name = "every")]
    EveryMatch,
}

impl fmt::Display for StrikeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstMatch => "first",
            Self::EveryMatch => "every",
        })
    }
}

/// Strike the letters `guess` accounts for out of one answer working copy
///
/// Same-position letters are struck first and used up on the guess side.
/// Each guess letter left over then strikes matching answer letters elsewhere
/// according to `mode`, without being used up itself.
///
/// # Examples
/// ```
/// use wordle_letters::core::{Slots, Word};
/// use wordle_letters::solver::{StrikeMode, strike_letters};
///
/// let guess = Word::new("CRANE").unwrap();
/// let mut answer = Slots::from(&Word::new("TRACE").unwrap());
///
/// strike_letters(&guess, &mut answer, StrikeMode::FirstMatch);
/// assert_eq!(answer.to_string(), "T____");
/// ```
pub fn strike_letters(guess: &Word, answer: &mut Slots, mode: StrikeMode) {
    let mut guess_copy = Slots::from(guess);

    for pos in 0..WORD_LENGTH {
        if let Some(letter) = guess_copy.get(pos)
            && answer.get(pos) == Some(letter)
        {
            answer.blank(pos);
            guess_copy.blank(pos);
        }
    }

    for (_, letter) in guess_copy.open_positions() {
        match mode {
            StrikeMode::FirstMatch => {
                if let Some(found) = answer.find(letter) {
                    answer.blank(found);
                }
            }
            StrikeMode::EveryMatch => {
                while let Some(found) = answer.find(letter) {
                    answer.blank(found);
                }
            }
        }
    }
}
