//! Compact set of the letters `a`-`z`

use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// Every letter `a`-`z`
    pub const ALL: Self = Self((1 << 26) - 1);

    /// Build a set from the letters in `letters`, ignoring anything that is
    /// not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use phonics_wordle::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("SATPIN");
    /// assert!(set.contains(b'p'));
    /// assert!(!set.contains(b'e'));
    /// assert_eq!(set.len(), 6);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Self::from_bytes(letters.as_bytes())
    }

    /// Build a set from raw bytes, ignoring anything that is not an ASCII letter
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .map(u8::to_ascii_lowercase)
            .filter(u8::is_ascii_lowercase)
            .fold(Self::EMPTY, |set, letter| set.with(letter))
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        if letter.is_ascii_lowercase() {
            Self(self.0 | Self::bit(letter))
        } else {
            self
        }
    }

    /// Whether `letter` (case-insensitive) is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        let letter = letter.to_ascii_lowercase();
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    /// Whether every letter of `word` is in the set
    #[must_use]
    pub fn allows(self, word: &str) -> bool {
        word.bytes().all(|letter| self.contains(letter))
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
