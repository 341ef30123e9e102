//! Core domain types
//!
//! Words, letter sets and the clue engine. Everything here is pure and
//! deterministic.

mod clue;
mod letters;
mod word;

pub use clue::{Clue, CluedGuess, CluedLetter, clue, describe_clue};
pub use letters::LetterSet;
pub use word::{
    DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError, is_supported_length,
};
