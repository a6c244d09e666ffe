//! Letter matching between one guess and one answer
//!
//! Approximates Wordle feedback with a fixed point scheme:
//! - 3 points for a positional hit (right letter, right place)
//! - 1 point for a non-positional hit (right letter, other place)
//!
//! Each answer position can be consumed at most once. Guess positions are
//! consumed by positional hits only; a non-positional hit consumes the answer
//! letter and leaves the guess letter in place.

use crate::core::{Slots, WORD_LENGTH, Word};
use std::ops::AddAssign;

/// Points for a letter in the right position
pub const POSITIONAL_POINTS: u32 = 3;

/// Points for a letter found elsewhere in the answer
pub const OTHER_POINTS: u32 = 1;

/// Hit counts for one guess against one (or, summed, many) answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    /// Letters matched in the same position
    pub positional: u32,
    /// Letters matched in a different position
    pub other: u32,
}

impl MatchCounts {
    /// Weighted score of these hits
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        self.positional * POSITIONAL_POINTS + self.other * OTHER_POINTS
    }

    /// Total letters matched on either pass
    #[cfg(test)]
    pub(crate) const fn hits(self) -> u32 {
        self.positional + self.other
    }
}

impl AddAssign for MatchCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.positional += rhs.positional;
        self.other += rhs.other;
    }
}

/// Match `guess` against a working copy of one answer
///
/// Blanks every answer position it consumes, so the caller must pass a fresh
/// copy for each pair.
///
/// # Algorithm
/// 1. Positional pass: equal letters at the same position are counted and
///    blanked on both sides.
/// 2. Non-positional pass: each guess position still open takes the first
///    open answer position holding its letter, blanking only the answer side.
///
/// # Examples
/// ```
/// use wordle_letters::core::{Slots, Word};
/// use wordle_letters::solver::match_letters;
///
/// let guess = Word::new("ABIDE").unwrap();
/// let answer = Word::new("BUDGE").unwrap();
/// let mut working = Slots::from(&answer);
///
/// let counts = match_letters(&guess, &mut working);
/// assert_eq!((counts.positional, counts.other), (1, 2));
/// assert_eq!(counts.points(), 5);
/// ```
pub fn match_letters(guess: &Word, answer: &mut Slots) -> MatchCounts {
    let mut guess_copy = Slots::from(guess);
    let mut counts = MatchCounts::default();

    for pos in 0..WORD_LENGTH {
        if let Some(letter) = guess_copy.get(pos)
            && answer.get(pos) == Some(letter)
        {
            answer.blank(pos);
            guess_copy.blank(pos);
            counts.positional += 1;
        }
    }

    for (_, letter) in guess_copy.open_positions() {
        if let Some(found) = answer.find(letter) {
            answer.blank(found);
            counts.other += 1;
        }
    }

    counts
}
