//! Hard-mode guess validation
//!
//! At stricter difficulties a new guess must respect everything earlier
//! clues revealed. Violations are reported as user-facing hint strings.

use crate::core::{Clue, CluedLetter};
use std::fmt;

/// How strictly new guesses are checked against earlier clues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    /// Any dictionary word of the right length is accepted
    #[default]
    Normal,
    /// Green letters must stay in place and revealed letters must be reused
    Hard,
    /// Hard, plus yellow letters must move and absent letters can't return
    UltraHard,
}

impl Difficulty {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::UltraHard => "ultra-hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ENGLISH_NUMBERS: [&str; 12] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

fn english_number(n: usize) -> String {
    ENGLISH_NUMBERS
        .get(n)
        .map_or_else(|| n.to_string(), |word| (*word).to_string())
}

/// `1st`, `2nd`, `3rd`, `4th`, ... `11th`, `12th`, `13th`, `21st`
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Check `guess` against the clues of one earlier guess
///
/// Returns a hint describing the first broken constraint, or `None` if the
/// guess is consistent with the clues. `Normal` difficulty never reports a
/// violation.
///
/// Rules, per clued letter at position `i`:
/// - `Correct` → the guess must have the same letter at `i`
/// - the guess must contain the letter at least as many times as it was
///   credited (`Correct` or `Elsewhere`) in the earlier guess
/// - `UltraHard` only: a letter not `Correct` at `i` can't be played at `i`
///   again, and a letter that also got an `Absent` clue must appear exactly
///   as many times as it was credited
///
/// # Examples
/// ```
/// use phonics_wordle::core::{clue, Word};
/// use phonics_wordle::rules::{violation, Difficulty};
///
/// let target = Word::new("rice").unwrap();
/// let earlier = clue(&Word::new("rise").unwrap(), &target);
///
/// assert_eq!(
///     violation(Difficulty::Hard, &earlier, "nice").as_deref(),
///     Some("1st letter must be R")
/// );
/// assert_eq!(violation(Difficulty::Normal, &earlier, "nice"), None);
/// ```
#[must_use]
pub fn violation(difficulty: Difficulty, clues: &[CluedLetter], guess: &str) -> Option<String> {
    if difficulty == Difficulty::Normal {
        return None;
    }
    let ultra = difficulty == Difficulty::UltraHard;
    let guess = guess.as_bytes();

    for (i, clued) in clues.iter().enumerate() {
        let letter = clued.letter;
        let clue_count = clues
            .iter()
            .filter(|c| c.letter == letter && c.clue != Clue::Absent)
            .count();
        let guess_count = guess.iter().filter(|&&ch| ch == letter).count();
        let glyph = letter.to_ascii_uppercase() as char;
        let glyphs = if clue_count == 1 {
            glyph.to_string()
        } else {
            format!("{glyph}s")
        };
        let nth = ordinal(i + 1);

        if clued.clue == Clue::Correct && guess.get(i) != Some(&letter) {
            return Some(format!("{nth} letter must be {glyph}"));
        }
        if guess_count < clue_count {
            let at_least = if clue_count > 1 {
                format!("at least {} ", english_number(clue_count))
            } else {
                String::new()
            };
            return Some(format!("Guess must contain {at_least}{glyphs}"));
        }
        if ultra {
            if clued.clue != Clue::Correct && guess.get(i) == Some(&letter) {
                return Some(format!("{nth} letter can't be {glyph}"));
            }
            if clued.clue == Clue::Absent && guess_count != clue_count {
                return Some(if clue_count == 0 {
                    format!("Guess can't contain {glyph}")
                } else {
                    format!(
                        "Guess must contain exactly {} {glyphs}",
                        english_number(clue_count)
                    )
                });
            }
        }
    }
    None
}

/// Check `guess` against every earlier clued guess, in order
///
/// Returns the first violation found.
#[must_use]
pub fn first_violation<'a, I>(difficulty: Difficulty, history: I, guess: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a [CluedLetter]>,
{
    history
        .into_iter()
        .find_map(|clues| violation(difficulty, clues, guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, clue};

    fn clues(guess: &str, target: &str) -> Vec<CluedLetter> {
        clue(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(22), "22nd");
    }

    #[test]
    fn difficulty_names() {
        assert_eq!(Difficulty::UltraHard.to_string(), "ultra-hard");
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn normal_accepts_everything() {
        let earlier = clues("rise", "rice");
        assert_eq!(violation(Difficulty::Normal, &earlier, "tent"), None);
    }

    #[test]
    fn hard_requires_green_in_place() {
        let earlier = clues("rise", "rice");
        assert_eq!(
            violation(Difficulty::Hard, &earlier, "iris").as_deref(),
            Some("1st letter must be R")
        );
        assert_eq!(
            violation(Difficulty::Hard, &earlier, "rake").as_deref(),
            Some("2nd letter must be I")
        );
        assert_eq!(violation(Difficulty::Hard, &earlier, "ripe"), None);
    }

    #[test]
    fn hard_requires_elsewhere_letter_somewhere() {
        // p sits elsewhere in "pin"
        let earlier = clues("sip", "pin");
        assert_eq!(
            violation(Difficulty::Hard, &earlier, "tin").as_deref(),
            Some("Guess must contain P")
        );
        assert_eq!(violation(Difficulty::Hard, &earlier, "pit"), None);
        // the same guess is fine when clues are not enforced
        assert_eq!(violation(Difficulty::Normal, &earlier, "tin"), None);
    }

    #[test]
    fn hard_counts_repeated_letters() {
        // both e's of "erase" are revealed by "speed"
        let earlier = clues("speed", "erase");
        assert_eq!(
            violation(Difficulty::Hard, &earlier, "sense").as_deref(),
            None
        );
        assert_eq!(
            violation(Difficulty::Hard, &earlier, "spare").as_deref(),
            Some("Guess must contain at least two Es")
        );
    }

    #[test]
    fn hard_allows_reusing_yellow_spot_and_absent_letters() {
        let earlier = clues("sip", "pin");
        // replaying the guess keeps p in its yellow slot and reuses s
        assert_eq!(violation(Difficulty::Hard, &earlier, "sip"), None);
    }

    #[test]
    fn ultra_forbids_yellow_in_same_spot() {
        let earlier = clues("sip", "pin");
        assert_eq!(
            violation(Difficulty::UltraHard, &earlier, "tip").as_deref(),
            Some("3rd letter can't be P")
        );
    }

    #[test]
    fn ultra_forbids_absent_letters() {
        let earlier = clues("sip", "pin");
        assert_eq!(
            violation(Difficulty::UltraHard, &earlier, "pis").as_deref(),
            Some("Guess can't contain S")
        );
        assert_eq!(violation(Difficulty::UltraHard, &earlier, "pit"), None);
    }

    #[test]
    fn ultra_requires_exact_count_when_capped() {
        // target has one e; the second e in "sheep" is absent
        let earlier = clues("sheep", "super");
        assert_eq!(
            violation(Difficulty::UltraHard, &earlier, "speed").as_deref(),
            Some("3rd letter can't be E")
        );
        assert_eq!(
            violation(Difficulty::UltraHard, &earlier, "spree").as_deref(),
            Some("Guess must contain exactly one E")
        );
    }

    #[test]
    fn first_violation_checks_each_guess() {
        let target = Word::new("pin").unwrap();
        let history: Vec<Vec<CluedLetter>> = ["sip", "tin"]
            .iter()
            .map(|g| clue(&Word::new(*g).unwrap(), &target))
            .collect();
        let refs = history.iter().map(Vec::as_slice);
        assert_eq!(
            first_violation(Difficulty::Hard, refs.clone(), "pat").as_deref(),
            Some("2nd letter must be I")
        );
        assert_eq!(first_violation(Difficulty::Hard, refs, "pin"), None);
    }
}
