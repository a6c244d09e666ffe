//! Core domain types for Wordle letter scoring
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and cheap to copy or clone.

mod slots;
mod word;

pub use slots::Slots;
pub use word::{WORD_LENGTH, Word, WordError};
