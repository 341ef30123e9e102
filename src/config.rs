//! Game data and per-game settings
//!
//! [`GameConfig`] bundles the immutable word data (ordered targets, guess
//! dictionary, resolved tier table). It is built once and borrowed by every
//! selector and session. [`GameSettings`] holds the player's choices for one
//! game.

use crate::challenge::LinkParams;
use crate::core::{DEFAULT_WORD_LENGTH, Word, is_supported_length};
use crate::rules::Difficulty;
use crate::selection::{ConfigError, PHONICS_STAGES, Tier, TierStage, TierTable, Vocabulary};
use crate::wordlists::{DICTIONARY, Dictionary, TARGETS};
use log::debug;

/// Default number of guesses before a game is lost
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Word data shared by every game
#[derive(Debug, Clone)]
pub struct GameConfig {
    vocabulary: Vocabulary,
    dictionary: Dictionary,
    tiers: TierTable,
}

impl GameConfig {
    /// Config built from the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `ConfigError` if the embedded tier table does not resolve,
    /// which would mean the shipped data is broken.
    ///
    /// # Examples
    /// ```
    /// use phonics_wordle::config::GameConfig;
    /// use phonics_wordle::selection::Tier;
    ///
    /// let config = GameConfig::embedded().unwrap();
    /// let words = config.eligible(3, Tier::MIN).unwrap();
    /// assert!(words.iter().any(|w| w.text() == "sat"));
    /// ```
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(TARGETS, DICTIONARY, &PHONICS_STAGES)
    }

    /// Config from custom ordered targets, dictionary words and stages
    ///
    /// # Errors
    /// Returns `ConfigError` if `stages` cannot be resolved against
    /// `targets` (wrong count, missing boundary word, shrinking tier).
    pub fn new<S, T>(
        targets: &[S],
        dictionary: &[T],
        stages: &[TierStage],
    ) -> Result<Self, ConfigError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let vocabulary = Vocabulary::new(targets);
        let tiers = TierTable::resolve(vocabulary.entries(), stages)?;
        let dictionary = Dictionary::new(dictionary, vocabulary.entries());
        debug!(
            "Game config: {} target entries, {} valid guesses",
            vocabulary.len(),
            dictionary.len()
        );
        Ok(Self {
            vocabulary,
            dictionary,
            tiers,
        })
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Whether `word` is accepted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Targets playable with `length` letters at `tier`
    ///
    /// # Errors
    /// - `ConfigError::UnsupportedLength` if `length` is outside `3..=5`
    /// - `ConfigError::NoCandidates` if no target qualifies
    pub fn eligible(&self, length: usize, tier: Tier) -> Result<Vec<Word>, ConfigError> {
        if !is_supported_length(length) {
            return Err(ConfigError::UnsupportedLength(length));
        }
        let words = self.vocabulary.eligible(length, self.tiers.get(tier));
        if words.is_empty() {
            return Err(ConfigError::NoCandidates { length, tier });
        }
        Ok(words)
    }
}

/// How guesses are checked during one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub difficulty: Difficulty,
    pub max_guesses: usize,
    /// Ignore typed letters the tier does not teach yet
    pub restrict_keyboard: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            max_guesses: DEFAULT_MAX_GUESSES,
            restrict_keyboard: true,
        }
    }
}

/// Player choices that select a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub length: usize,
    pub tier: Tier,
    pub seed: Option<String>,
    /// 1-based game of the seed's sequence
    pub game_number: u32,
    /// Encoded challenge token, which overrides the seed
    pub challenge: Option<String>,
    pub rules: GameRules,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_WORD_LENGTH,
            tier: Tier::DEFAULT,
            seed: None,
            game_number: 1,
            challenge: None,
            rules: GameRules::default(),
        }
    }
}

impl GameSettings {
    /// Settings carried by a share link, with default rules
    ///
    /// # Examples
    /// ```
    /// use phonics_wordle::challenge::LinkParams;
    /// use phonics_wordle::config::GameSettings;
    ///
    /// let params = LinkParams::parse("?seed=abc&length=3&game=7");
    /// let settings = GameSettings::from_link(&params);
    /// assert_eq!(settings.seed.as_deref(), Some("abc"));
    /// assert_eq!(settings.length, 3);
    /// assert_eq!(settings.game_number, 7);
    /// ```
    #[must_use]
    pub fn from_link(params: &LinkParams) -> Self {
        Self {
            length: params.word_length(),
            tier: params.tier(),
            seed: params.seed().map(str::to_string),
            game_number: params.game_number(),
            challenge: params.challenge().map(str::to_string),
            rules: GameRules::default(),
        }
    }
}
