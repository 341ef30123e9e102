//! A run of games sharing one settings block and one random stream

use super::{Game, GameState};
use crate::challenge::{LinkParams, challenge_link, describe_seed, seed_link};
use crate::config::{GameConfig, GameRules, GameSettings};
use crate::core::{Word, is_supported_length};
use crate::selection::{ConfigError, TargetSelector, Tier};
use log::info;
use std::fmt;

/// Hint shown when a challenge link can't be played
pub const INVALID_CHALLENGE_HINT: &str = "Invalid challenge string, playing random game.";

/// A settings change that is not allowed right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Length and tier are fixed once a guess is underway
    GuessInProgress,
    /// Length and tier are fixed by the challenge
    ChallengeInProgress,
    Config(ConfigError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuessInProgress => write!(f, "Finish or give up on this game first"),
            Self::ChallengeInProgress => write!(f, "Settings are fixed during a challenge"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// The player's side of the puzzle: settings, random stream, current game
///
/// # Examples
/// ```
/// use phonics_wordle::config::{GameConfig, GameSettings};
/// use phonics_wordle::game::Session;
///
/// let config = GameConfig::embedded().unwrap();
/// let settings = GameSettings {
///     seed: Some("20220110".to_string()),
///     ..GameSettings::default()
/// };
/// let session = Session::start(&config, settings).unwrap();
/// assert_eq!(session.status_line(), "Monday, January 10, 2022 — length 4, game 1");
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    config: &'a GameConfig,
    selector: TargetSelector<'a>,
    settings: GameSettings,
    game: Game<'a>,
}

impl<'a> Session<'a> {
    /// Start with the game `settings` describe
    ///
    /// A challenge that can't be played is dropped in favour of a seeded or
    /// random game, with [`INVALID_CHALLENGE_HINT`] as the opening hint.
    ///
    /// # Errors
    /// Returns `ConfigError` if no target fits the requested length and tier.
    pub fn start(config: &'a GameConfig, mut settings: GameSettings) -> Result<Self, ConfigError> {
        let mut selector = TargetSelector::new(config, settings.seed.as_deref());

        let mut notice = None;
        let challenge = match settings.challenge.as_deref() {
            Some(token) => match selector.select_challenge(token, settings.tier) {
                Ok(word) => Some(word),
                Err(_) => {
                    notice = Some(INVALID_CHALLENGE_HINT);
                    None
                }
            },
            None => None,
        };

        let game = if let Some(target) = challenge {
            settings.length = target.len();
            Game::new(config, target, settings.tier, settings.rules, true)
        } else {
            settings.challenge = None;
            let target = selector.advance_to(
                settings.seed.as_deref(),
                settings.length,
                settings.tier,
                settings.game_number,
            )?;
            Game::new(config, target, settings.tier, settings.rules, false)
        };

        let mut session = Self {
            config,
            selector,
            settings,
            game,
        };
        if let Some(notice) = notice {
            session.game.set_hint(notice);
        }
        Ok(session)
    }

    /// Start from the query parameters of a share link
    ///
    /// # Errors
    /// Returns `ConfigError` if no target fits the link's length and tier.
    pub fn from_link(
        config: &'a GameConfig,
        link: &str,
        rules: GameRules,
    ) -> Result<Self, ConfigError> {
        let settings = GameSettings {
            rules,
            ..GameSettings::from_link(&LinkParams::parse(link))
        };
        Self::start(config, settings)
    }

    #[must_use]
    pub const fn game(&self) -> &Game<'a> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<'a> {
        &mut self.game
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub const fn config(&self) -> &'a GameConfig {
        self.config
    }

    #[must_use]
    pub fn is_challenge(&self) -> bool {
        self.settings.challenge.is_some()
    }

    /// Replace the current game with the next target of the stream
    ///
    /// Leaves any challenge behind and counts the game number up.
    ///
    /// # Errors
    /// Returns `ConfigError` if no target fits the current length and tier.
    ///
    /// The session is left unchanged on error.
    pub fn next_game(&mut self) -> Result<(), ConfigError> {
        let game_number = self.settings.game_number.saturating_add(1);
        let mut selector = self.selector.clone();

        let target = if self.is_challenge() {
            // the stream was never drawn from, so skip to the numbered game
            selector.advance_to(
                self.settings.seed.as_deref(),
                self.settings.length,
                self.settings.tier,
                game_number,
            )?
        } else {
            selector.select_random(self.settings.length, self.settings.tier)?
        };

        self.selector = selector;
        self.settings.challenge = None;
        self.settings.game_number = game_number;
        self.replace_game(target);
        info!("Started game {}", self.settings.game_number);
        Ok(())
    }

    /// Switch word length and restart the seed from game 1
    ///
    /// # Errors
    /// - `SessionError::GuessInProgress` while a guess is underway
    /// - `SessionError::ChallengeInProgress` during a challenge
    /// - `SessionError::Config` for an unsupported length or empty word list
    ///
    /// The session is left unchanged on error.
    pub fn set_length(&mut self, length: usize) -> Result<(), SessionError> {
        self.ensure_unlocked()?;
        if !is_supported_length(length) {
            return Err(ConfigError::UnsupportedLength(length).into());
        }
        self.restart(length, self.settings.tier)
    }

    /// Switch tier and restart the seed from game 1
    ///
    /// # Errors
    /// Same as [`Session::set_length`].
    pub fn set_tier(&mut self, tier: Tier) -> Result<(), SessionError> {
        self.ensure_unlocked()?;
        self.restart(self.settings.length, tier)
    }

    fn ensure_unlocked(&self) -> Result<(), SessionError> {
        if self.is_challenge() && self.game.state() == GameState::Playing {
            return Err(SessionError::ChallengeInProgress);
        }
        if self.game.in_progress() {
            return Err(SessionError::GuessInProgress);
        }
        Ok(())
    }

    fn restart(&mut self, length: usize, tier: Tier) -> Result<(), SessionError> {
        let mut selector = self.selector.clone();
        selector.reseed(self.settings.seed.as_deref());
        let target = selector.select_random(length, tier)?;

        self.selector = selector;
        self.settings.length = length;
        self.settings.tier = tier;
        self.settings.game_number = 1;
        self.settings.challenge = None;
        self.replace_game(target);
        self.game.set_hint(format!("{length} letters"));
        Ok(())
    }

    fn replace_game(&mut self, target: Word) {
        self.game = Game::new(
            self.config,
            target,
            self.settings.tier,
            self.settings.rules,
            false,
        );
    }

    /// One-line description of what is being played
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.is_challenge() {
            return "playing a challenge game".to_string();
        }
        match self.settings.seed.as_deref() {
            Some(seed) => format!(
                "{} — length {}, game {}",
                describe_seed(seed),
                self.settings.length,
                self.settings.game_number
            ),
            None => "playing a random game".to_string(),
        }
    }

    /// Link that lets someone else play the current target
    #[must_use]
    pub fn challenge_link(&self, base_url: &str) -> String {
        challenge_link(base_url, self.game.target().text(), self.settings.tier)
    }

    /// Link to share: the seed link when seeded, else a challenge link
    #[must_use]
    pub fn share_link(&self, base_url: &str) -> String {
        match self.settings.seed.as_deref() {
            Some(seed) if !self.is_challenge() => seed_link(
                base_url,
                seed,
                self.settings.length,
                self.settings.tier,
                self.settings.game_number,
            ),
            _ => self.challenge_link(base_url),
        }
    }
}
