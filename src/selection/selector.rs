//! Picking the target word of a game
//!
//! Three modes: a fresh random pick, a replay of game N of a seed, and a
//! challenge word supplied through a link.

use super::{ConfigError, SeededRng, Tier};
use crate::challenge::{DecodeError, decode};
use crate::config::GameConfig;
use crate::core::{Word, is_supported_length};
use log::{debug, warn};
use std::fmt;

/// A challenge token that decoded but cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// The token itself is malformed
    Decode(DecodeError),
    /// The decoded text is not a valid guess
    NotAWord(String),
    /// The word has a length outside `3..=5`
    UnsupportedLength(usize),
    /// The word uses letters the tier does not teach
    LettersNotAllowed { word: String, tier: Tier },
}

impl fmt::Display for ChallengeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "{e}"),
            Self::NotAWord(word) => write!(f, "Challenge word '{word}' is not in the dictionary"),
            Self::UnsupportedLength(length) => {
                write!(f, "Challenge word has unsupported length {length}")
            }
            Self::LettersNotAllowed { word, tier } => {
                write!(f, "Challenge word '{word}' uses letters not taught by tier {tier}")
            }
        }
    }
}

impl std::error::Error for ChallengeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for ChallengeError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

/// Chooses targets from a [`GameConfig`] with its own [`SeededRng`]
///
/// # Examples
/// ```
/// use phonics_wordle::config::GameConfig;
/// use phonics_wordle::selection::{TargetSelector, Tier};
///
/// let config = GameConfig::embedded().unwrap();
/// let mut a = TargetSelector::new(&config, None);
/// let mut b = TargetSelector::new(&config, None);
///
/// let first = a.advance_to(Some("20220110"), 4, Tier::DEFAULT, 3).unwrap();
/// let second = b.advance_to(Some("20220110"), 4, Tier::DEFAULT, 3).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct TargetSelector<'a> {
    config: &'a GameConfig,
    rng: SeededRng,
}

impl<'a> TargetSelector<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig, seed: Option<&str>) -> Self {
        Self {
            config,
            rng: SeededRng::new(seed),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Seed of the current stream, if seeded
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.rng.seed()
    }

    /// Restart the stream from `seed`, or from fresh entropy
    pub fn reseed(&mut self, seed: Option<&str>) {
        self.rng.reset(seed);
    }

    /// Next target of the stream
    ///
    /// # Errors
    /// Returns `ConfigError` if no target fits `length` and `tier`.
    pub fn select_random(&mut self, length: usize, tier: Tier) -> Result<Word, ConfigError> {
        let candidates = self.config.eligible(length, tier)?;
        let word = self
            .rng
            .pick(&candidates)
            .cloned()
            .ok_or(ConfigError::NoCandidates { length, tier })?;
        debug!(
            "Selected target from {} candidates (length {length}, tier {tier})",
            candidates.len()
        );
        Ok(word)
    }

    /// Target of game `game_number` of `seed`
    ///
    /// Restarts the stream and discards `game_number - 1` picks, so the
    /// same arguments always produce the same word. Game 0 is game 1.
    ///
    /// # Errors
    /// Returns `ConfigError` if no target fits `length` and `tier`.
    pub fn advance_to(
        &mut self,
        seed: Option<&str>,
        length: usize,
        tier: Tier,
        game_number: u32,
    ) -> Result<Word, ConfigError> {
        let candidates = self.config.eligible(length, tier)?;
        self.rng.reset(seed);
        for _ in 1..game_number {
            self.rng.pick(&candidates);
        }
        let word = self
            .rng
            .pick(&candidates)
            .cloned()
            .ok_or(ConfigError::NoCandidates { length, tier })?;
        debug!("Advanced to game {game_number} (seed: {:?})", self.rng.seed());
        Ok(word)
    }

    /// Target carried by a challenge token
    ///
    /// Only the tier's letters are checked, not its word cutoff, so a
    /// challenge may use any dictionary word spelled with taught letters.
    ///
    /// # Errors
    /// Returns `ChallengeError` if the token is malformed or names a word
    /// that cannot be played at `tier`.
    pub fn select_challenge(&self, token: &str, tier: Tier) -> Result<Word, ChallengeError> {
        let result = self.check_challenge(token, tier);
        if let Err(e) = &result {
            warn!("Rejected challenge '{token}': {e}");
        }
        result
    }

    fn check_challenge(&self, token: &str, tier: Tier) -> Result<Word, ChallengeError> {
        let text = decode(token)?.trim().to_lowercase();
        if !self.config.is_valid_guess(&text) {
            return Err(ChallengeError::NotAWord(text));
        }
        let word = Word::new(text.as_str()).map_err(|_| ChallengeError::NotAWord(text.clone()))?;
        if !is_supported_length(word.len()) {
            return Err(ChallengeError::UnsupportedLength(word.len()));
        }
        if !self.config.tiers().letters(tier).allows(word.text()) {
            return Err(ChallengeError::LettersNotAllowed { word: text, tier });
        }
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::encode;
    use crate::selection::TierStage;

    fn config() -> GameConfig {
        GameConfig::embedded().unwrap()
    }

    #[test]
    fn advance_to_is_deterministic() {
        let config = config();
        let mut selector = TargetSelector::new(&config, None);
        for game in [1, 2, 10, 1000] {
            let first = selector.advance_to(Some("phonics"), 4, Tier::DEFAULT, game);
            let second = selector.advance_to(Some("phonics"), 4, Tier::DEFAULT, game);
            assert_eq!(first, second, "game {game}");
        }
    }

    #[test]
    fn next_game_equals_replay_of_picks() {
        let config = config();
        let mut replay = TargetSelector::new(&config, None);
        let mut stream = TargetSelector::new(&config, Some("20220110"));

        for n in 1..=12 {
            let expected = stream.select_random(5, Tier::MAX).unwrap();
            let replayed = replay
                .advance_to(Some("20220110"), 5, Tier::MAX, n)
                .unwrap();
            assert_eq!(replayed, expected, "game {n}");
        }
    }

    #[test]
    fn random_targets_respect_length_and_tier() {
        let config = config();
        let mut selector = TargetSelector::new(&config, None);
        let letters = config.tiers().letters(Tier::MIN);
        for _ in 0..100 {
            let word = selector.select_random(3, Tier::MIN).unwrap();
            assert_eq!(word.len(), 3);
            assert!(letters.allows(word.text()), "{word}");
        }
    }

    #[test]
    fn empty_candidates_error_instead_of_hang() {
        let stages = [TierStage {
            label: "tiny",
            boundary: "pin",
            letters: "satpin",
        }; 14];
        let config = GameConfig::new(&["sat", "pin"], &["snap"], &stages).unwrap();
        let mut selector = TargetSelector::new(&config, Some("x"));
        assert_eq!(
            selector.select_random(5, Tier::MIN),
            Err(ConfigError::NoCandidates {
                length: 5,
                tier: Tier::MIN
            })
        );
        assert!(selector.advance_to(Some("x"), 5, Tier::MIN, 3).is_err());
    }

    #[test]
    fn challenge_accepts_playable_word() {
        let config = config();
        let selector = TargetSelector::new(&config, None);
        let word = selector.select_challenge(&encode("plane"), Tier::MAX).unwrap();
        assert_eq!(word.text(), "plane");

        let upper = selector.select_challenge(&encode("PLANE"), Tier::MAX).unwrap();
        assert_eq!(upper.text(), "plane");
    }

    #[test]
    fn challenge_rejections() {
        let config = config();
        let selector = TargetSelector::new(&config, None);

        assert!(matches!(
            selector.select_challenge("!!!", Tier::MAX),
            Err(ChallengeError::Decode(_))
        ));
        assert_eq!(
            selector.select_challenge(&encode("qzxv"), Tier::MAX),
            Err(ChallengeError::NotAWord("qzxv".to_string()))
        );
        assert_eq!(
            selector.select_challenge(&encode("plane"), Tier::MIN),
            Err(ChallengeError::LettersNotAllowed {
                word: "plane".to_string(),
                tier: Tier::MIN
            })
        );
    }

    #[test]
    fn challenge_length_is_checked() {
        let stages = [TierStage {
            label: "tiny",
            boundary: "sat",
            letters: "satpin",
        }; 14];
        let config = GameConfig::new(&["sat"], &["at", "pants"], &stages).unwrap();
        let selector = TargetSelector::new(&config, None);
        assert_eq!(
            selector.select_challenge(&encode("at"), Tier::MIN),
            Err(ChallengeError::UnsupportedLength(2))
        );
        assert_eq!(selector.select_challenge(&encode("pants"), Tier::MIN).unwrap().text(), "pants");
    }
}
