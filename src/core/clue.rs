//! Per-letter feedback ("clues") for a guess against the target
//!
//! Each letter of a guess gets one of three clues, ordered
//! `Absent < Elsewhere < Correct` so the best-known state of a letter is
//! simply the maximum clue it has received.

use super::Word;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Clue {
    /// Letter is not in the target (or every copy is already accounted for)
    Absent,
    /// Letter is in the target at another position
    Elsewhere,
    /// Letter is in the target at this position
    Correct,
}

impl Clue {
    /// The word used for this clue in spoken descriptions
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Absent => "no",
            Self::Elsewhere => "elsewhere",
            Self::Correct => "correct",
        }
    }

    /// Index into a three-symbol palette (absent, elsewhere, correct)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A letter of a guess together with its clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CluedLetter {
    pub letter: u8,
    pub clue: Clue,
}

impl CluedLetter {
    #[must_use]
    pub const fn new(letter: u8, clue: Clue) -> Self {
        Self { letter, clue }
    }
}

/// Calculate the clues when `guess` is played against `target`
///
/// Implements the exact feedback rules, including duplicate letters:
/// 1. First pass: exact position matches are `Correct` and use up that
///    copy of the letter in the target
/// 2. Second pass: remaining letters are `Elsewhere` while unused copies of
///    the letter are left in the target, `Absent` otherwise
///
/// A letter is never credited (`Correct` or `Elsewhere`) more times than it
/// occurs in the target. Positions past the end of the target are `Absent`.
///
/// # Examples
/// ```
/// use phonics_wordle::core::{clue, Clue, Word};
///
/// let guess = Word::new("rise").unwrap();
/// let target = Word::new("rice").unwrap();
/// let clues: Vec<Clue> = clue(&guess, &target).iter().map(|c| c.clue).collect();
///
/// assert_eq!(clues, [Clue::Correct, Clue::Correct, Clue::Absent, Clue::Correct]);
/// ```
#[must_use]
pub fn clue(guess: &Word, target: &Word) -> Vec<CluedLetter> {
    let guess_chars = guess.chars();
    let target_chars = target.chars();
    let mut result = vec![Clue::Absent; guess_chars.len()];
    let mut target_available = target.char_counts();

    // First pass: Mark exact position matches
    for (i, &letter) in guess_chars.iter().enumerate() {
        if target_chars.get(i) == Some(&letter) {
            result[i] = Clue::Correct;

            // Remove from available pool
            if let Some(count) = target_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Mark present-elsewhere from what is left
    for (i, &letter) in guess_chars.iter().enumerate() {
        if result[i] == Clue::Absent
            && let Some(count) = target_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = Clue::Elsewhere;
            *count -= 1;
        }
    }

    guess_chars
        .iter()
        .zip(result)
        .map(|(&letter, clue)| CluedLetter::new(letter, clue))
        .collect()
}

/// One-line, speakable summary of a clued guess
///
/// # Examples
/// ```
/// use phonics_wordle::core::{clue, describe_clue, Word};
///
/// let clues = clue(&Word::new("rise").unwrap(), &Word::new("rice").unwrap());
/// assert_eq!(describe_clue(&clues), "R correct, I correct, S no, E correct");
/// ```
#[must_use]
pub fn describe_clue(clues: &[CluedLetter]) -> String {
    clues
        .iter()
        .map(|c| format!("{} {}", c.letter.to_ascii_uppercase() as char, c.clue.word()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A locked-in guess paired with its clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CluedGuess {
    word: Word,
    letters: Vec<CluedLetter>,
}

impl CluedGuess {
    /// Clue `guess` against `target`
    #[must_use]
    pub fn new(guess: Word, target: &Word) -> Self {
        let letters = clue(&guess, target);
        Self {
            word: guess,
            letters,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn letters(&self) -> &[CluedLetter] {
        &self.letters
    }

    /// Whether every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty() && self.letters.iter().all(|c| c.clue == Clue::Correct)
    }

    /// Speakable summary, see [`describe_clue`]
    #[must_use]
    pub fn describe(&self) -> String {
        describe_clue(&self.letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Clue::{Absent, Correct, Elsewhere};

    fn clues_of(guess: &str, target: &str) -> Vec<Clue> {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        clue(&guess, &target).into_iter().map(|c| c.clue).collect()
    }

    #[test]
    fn clue_ordering() {
        assert!(Absent < Elsewhere);
        assert!(Elsewhere < Correct);
        assert_eq!(Correct.index(), 2);
    }

    #[test]
    fn rise_against_rice() {
        assert_eq!(
            clues_of("rise", "rice"),
            [Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn superb_against_sheep() {
        // s and the e at index 3 line up; p sits elsewhere; u, r and b are absent
        assert_eq!(
            clues_of("superb", "sheep"),
            [Correct, Absent, Elsewhere, Correct, Absent, Absent]
        );
    }

    #[test]
    fn sheep_against_super_credits_one_e() {
        // super has a single e at index 3: the e at index 3 is green,
        // the e at index 2 has nothing left to claim
        assert_eq!(
            clues_of("sheep", "super"),
            [Correct, Absent, Absent, Correct, Elsewhere]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: both e's of erase are still free for speed's e's
        assert_eq!(
            clues_of("speed", "erase"),
            [Elsewhere, Absent, Elsewhere, Elsewhere, Absent]
        );
        // ROBOT vs FLOOR: second o is green, first o claims the other o
        assert_eq!(
            clues_of("robot", "floor"),
            [Elsewhere, Elsewhere, Absent, Correct, Absent]
        );
    }

    #[test]
    fn leftmost_unmatched_copy_gets_elsewhere() {
        // one t in the target, two in the guess, neither in place
        assert_eq!(clues_of("tint", "stop"), [Elsewhere, Absent, Absent, Absent]);
    }

    #[test]
    fn all_correct_and_all_absent() {
        assert_eq!(clues_of("plane", "plane"), [Correct; 5]);
        assert_eq!(clues_of("dog", "sip"), [Absent; 3]);
    }

    #[test]
    fn credited_letters_never_exceed_target_counts() {
        let words = [
            "sheep", "super", "speed", "erase", "robot", "floor", "tint", "stop", "insist",
            "sits", "tens", "teeth", "eerie", "geese", "emcee",
        ];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let clues = clue(&g, &t);
                for (i, c) in clues.iter().enumerate() {
                    if t.chars().get(i) == Some(&c.letter) {
                        assert_eq!(c.clue, Correct, "{guess} vs {target} at {i}");
                    }
                }
                for letter in b'a'..=b'z' {
                    let credited = clues
                        .iter()
                        .filter(|c| c.letter == letter && c.clue != Absent)
                        .count();
                    assert!(
                        credited <= t.count_of(letter),
                        "{guess} vs {target} over-credits {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn describe_lists_letters_in_order() {
        let clues = clue(&Word::new("sip").unwrap(), &Word::new("pin").unwrap());
        assert_eq!(describe_clue(&clues), "S no, I correct, P elsewhere");
        assert_eq!(describe_clue(&[]), "");
    }

    #[test]
    fn clued_guess_detects_solution() {
        let target = Word::new("rice").unwrap();
        let win = CluedGuess::new(Word::new("rice").unwrap(), &target);
        let miss = CluedGuess::new(Word::new("rise").unwrap(), &target);
        assert!(win.is_solved());
        assert!(!miss.is_solved());
        assert_eq!(miss.word().text(), "rise");
        assert_eq!(miss.letters().len(), 4);
        assert_eq!(miss.describe(), "R correct, I correct, S no, E correct");
    }
}
