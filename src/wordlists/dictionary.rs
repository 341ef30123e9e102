//! Set of words accepted as guesses

use crate::selection::is_placeholder;
use rustc_hash::FxHashSet;

/// Every word a player may guess
///
/// The union of the general dictionary and the real (non-placeholder)
/// entries of the target list, so any target is always guessable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build from dictionary words plus target entries
    pub fn new<I, J, S, T>(dictionary: I, targets: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let words = dictionary
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .chain(
                targets
                    .into_iter()
                    .map(|w| w.as_ref().trim().to_lowercase()),
            )
            .filter(|w| !w.is_empty() && !is_placeholder(w))
            .collect();
        Self { words }
    }

    /// Whether `word` may be guessed (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
