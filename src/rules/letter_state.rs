//! Best-known clue per letter, for keyboard highlighting

use crate::core::{Clue, CluedGuess, CluedLetter};
use rustc_hash::FxHashMap;

/// The strongest clue each letter has received so far
///
/// A letter only ever moves up the `Absent < Elsewhere < Correct` order;
/// a weaker clue from a later guess never downgrades it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<u8, Clue>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every locked-in guess into a fresh map
    ///
    /// # Examples
    /// ```
    /// use phonics_wordle::core::{Clue, CluedGuess, Word};
    /// use phonics_wordle::rules::LetterStates;
    ///
    /// let target = Word::new("pin").unwrap();
    /// let guesses = [
    ///     CluedGuess::new(Word::new("pit").unwrap(), &target),
    ///     CluedGuess::new(Word::new("nap").unwrap(), &target),
    /// ];
    /// let states = LetterStates::from_guesses(&guesses);
    ///
    /// // p was green in "pit" and stays green after "nap"
    /// assert_eq!(states.get(b'p'), Some(Clue::Correct));
    /// assert_eq!(states.get(b'n'), Some(Clue::Elsewhere));
    /// assert_eq!(states.get(b't'), Some(Clue::Absent));
    /// assert_eq!(states.get(b'z'), None);
    /// ```
    #[must_use]
    pub fn from_guesses(guesses: &[CluedGuess]) -> Self {
        let mut states = Self::new();
        for guess in guesses {
            states.record_all(guess.letters());
        }
        states
    }

    /// Raise `letter` to `clue` unless it already has an equal or better one
    pub fn record(&mut self, letter: u8, clue: Clue) {
        self.states
            .entry(letter)
            .and_modify(|best| *best = (*best).max(clue))
            .or_insert(clue);
    }

    pub fn record_all(&mut self, letters: &[CluedLetter]) {
        for clued in letters {
            self.record(clued.letter, clued.clue);
        }
    }

    /// Best-known clue for `letter`, or `None` if it has not been played
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Clue> {
        self.states.get(&letter.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
