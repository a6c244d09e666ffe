//! Working copy of a word with blankable letter positions
//!
//! Matching consumes letters: once a position has been counted it is blanked
//! so it cannot be counted again. `Slots` is that disposable copy. It is `Copy`,
//! so every scoring pair starts from a fresh value instead of a reset buffer.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Five letter positions, each either still available or blanked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slots([Option<u8>; WORD_LENGTH]);

impl Slots {
    /// Letter at `position`, or `None` if it has been blanked
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    /// Blank the letter at `position`
    #[inline]
    pub fn blank(&mut self, position: usize) {
        self.0[position] = None;
    }

    /// Positions that are still available, in order
    pub fn open_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|letter| (i, letter)))
    }

    /// Number of positions that have been blanked
    #[cfg(test)]
    pub(crate) fn blank_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    /// First open position holding `letter`, if any
    #[must_use]
    pub fn find(&self, letter: u8) -> Option<usize> {
        self.0.iter().position(|&slot| slot == Some(letter))
    }
}

impl From<&Word> for Slots {
    fn from(word: &Word) -> Self {
        Self(word.letters().map(Some))
    }
}

impl fmt::Display for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            let ch = slot.map_or('_', char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
