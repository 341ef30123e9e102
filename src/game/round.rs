//! State machine of a single game
//!
//! `Playing → Won | Lost`, with `Playing → Playing` for every accepted guess
//! that does not end the game. Won and Lost are terminal; only the session
//! can replace a finished game with a new one.

use crate::config::{GameConfig, GameRules};
use crate::core::{CluedGuess, Word};
use crate::rules::{LetterStates, first_violation};
use crate::selection::Tier;
use log::info;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A guess that was rejected without being used up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The game already ended
    GameOver,
    TooShort,
    TooLong,
    /// Not in the guess dictionary
    NotAWord,
    /// Contradicts an earlier clue under hard mode
    Violation(String),
    /// Uses a letter the tier does not teach while the keyboard is restricted
    LetterNotAllowed(char),
    /// Giving up needs at least one guess
    NoGuessesYet,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::TooShort => write!(f, "Too short"),
            Self::TooLong => write!(f, "Too long"),
            Self::NotAWord => write!(f, "Not a valid word"),
            Self::Violation(message) => f.write_str(message),
            Self::LetterNotAllowed(letter) => {
                write!(f, "{} isn't used yet", letter.to_ascii_uppercase())
            }
            Self::NoGuessesYet => write!(f, "Make a guess first"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One game against a fixed target
///
/// # Examples
/// ```
/// use phonics_wordle::config::{GameConfig, GameRules};
/// use phonics_wordle::core::Word;
/// use phonics_wordle::game::{Game, GameState};
/// use phonics_wordle::selection::Tier;
///
/// let config = GameConfig::embedded().unwrap();
/// let target = Word::new("rice").unwrap();
/// let mut game = Game::new(&config, target, Tier::MAX, GameRules::default(), false);
///
/// assert_eq!(game.submit_word("rise"), Ok(GameState::Playing));
/// assert_eq!(game.hint(), "R correct, I correct, S no, E correct");
/// assert_eq!(game.submit_word("rice"), Ok(GameState::Won));
/// ```
#[derive(Debug, Clone)]
pub struct Game<'a> {
    config: &'a GameConfig,
    target: Word,
    tier: Tier,
    rules: GameRules,
    challenge: bool,
    guesses: Vec<CluedGuess>,
    current: String,
    state: GameState,
    hint: String,
}

impl<'a> Game<'a> {
    /// Start a game; `challenge` marks a target that came from a link
    #[must_use]
    pub fn new(
        config: &'a GameConfig,
        target: Word,
        tier: Tier,
        rules: GameRules,
        challenge: bool,
    ) -> Self {
        info!(
            "New game: {} letters, tier {tier}, {} mode",
            target.len(),
            rules.difficulty
        );
        Self {
            config,
            target,
            tier,
            rules,
            challenge,
            guesses: Vec::new(),
            current: String::new(),
            state: GameState::Playing,
            hint: String::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub const fn rules(&self) -> GameRules {
        self.rules
    }

    #[must_use]
    pub const fn is_challenge(&self) -> bool {
        self.challenge
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Locked-in guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[CluedGuess] {
        &self.guesses
    }

    /// The guess being typed
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Message for the player: an error, the spoken clues, or the result
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub(crate) fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = hint.into();
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.rules.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Whether a guess is underway, which locks the session settings
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.state == GameState::Playing && (!self.guesses.is_empty() || !self.current.is_empty())
    }

    /// Best clue seen so far for each letter
    #[must_use]
    pub fn letter_states(&self) -> LetterStates {
        LetterStates::from_guesses(&self.guesses)
    }

    /// Whether `letter` can be typed at this tier
    #[must_use]
    pub fn is_letter_allowed(&self, letter: char) -> bool {
        letter.is_ascii_alphabetic()
            && (!self.rules.restrict_keyboard
                || self.config.tiers().letters(self.tier).contains(letter as u8))
    }

    /// Append a letter to the current guess
    ///
    /// Returns false, leaving the guess unchanged, when the game is over,
    /// the guess is full, or the letter can't be typed at this tier.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if self.state.is_over()
            || self.current.len() >= self.word_length()
            || !self.is_letter_allowed(letter)
        {
            return false;
        }
        self.current.push(letter.to_ascii_lowercase());
        self.hint.clear();
        true
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        let removed = self.current.pop().is_some();
        if removed {
            self.hint.clear();
        }
        removed
    }

    /// Type `word` in place of the current guess and submit it
    ///
    /// # Errors
    /// See [`Game::submit`]; additionally rejects words that are too long
    /// or use letters the keyboard would not accept.
    pub fn submit_word(&mut self, word: &str) -> Result<GameState, GuessError> {
        if self.state.is_over() {
            return self.reject(GuessError::GameOver);
        }
        let word = word.trim();
        if word.chars().count() > self.word_length() {
            return self.reject(GuessError::TooLong);
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return self.reject(GuessError::NotAWord);
        }
        if let Some(letter) = word.chars().find(|&c| !self.is_letter_allowed(c)) {
            return self.reject(GuessError::LetterNotAllowed(letter));
        }

        self.current = word.to_ascii_lowercase();
        self.submit()
    }

    /// Lock in the current guess
    ///
    /// A rejected guess is kept for editing and does not use up a turn;
    /// the hint is set to the rejection message.
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game has ended
    /// - `GuessError::TooShort` if fewer letters than the target were typed
    /// - `GuessError::NotAWord` if the guess is not in the dictionary
    /// - `GuessError::Violation` if hard mode rules out the guess
    pub fn submit(&mut self) -> Result<GameState, GuessError> {
        if self.state.is_over() {
            return self.reject(GuessError::GameOver);
        }
        if self.current.len() < self.word_length() {
            return self.reject(GuessError::TooShort);
        }
        if !self.config.is_valid_guess(&self.current) {
            return self.reject(GuessError::NotAWord);
        }
        let history = self.guesses.iter().map(CluedGuess::letters);
        if let Some(message) = first_violation(self.rules.difficulty, history, &self.current) {
            return self.reject(GuessError::Violation(message));
        }
        let Ok(word) = Word::new(std::mem::take(&mut self.current)) else {
            return self.reject(GuessError::NotAWord);
        };

        let guess = CluedGuess::new(word, &self.target);
        let solved = guess.is_solved();
        let spoken = guess.describe();
        self.guesses.push(guess);

        if solved {
            self.finish(GameState::Won);
        } else if self.guesses.len() >= self.rules.max_guesses {
            self.finish(GameState::Lost);
        } else {
            self.hint = spoken;
        }
        Ok(self.state)
    }

    /// Forfeit the game and reveal the target
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game has ended
    /// - `GuessError::NoGuessesYet` before the first guess
    pub fn give_up(&mut self) -> Result<(), GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.guesses.is_empty() {
            return Err(GuessError::NoGuessesYet);
        }
        self.state = GameState::Lost;
        self.current.clear();
        self.hint = format!(
            "The answer was {}. (Enter to {})",
            self.target.text().to_uppercase(),
            self.next_action()
        );
        info!("Gave up after {} guesses", self.guesses.len());
        Ok(())
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        let outcome = if state == GameState::Won { "won" } else { "lost" };
        self.hint = format!(
            "You {outcome}! The answer was {}. (Enter to {})",
            self.target.text().to_uppercase(),
            self.next_action()
        );
        info!("Game {outcome} in {} guesses", self.guesses.len());
    }

    const fn next_action(&self) -> &'static str {
        if self.challenge {
            "play a random game"
        } else {
            "play again"
        }
    }

    fn reject(&mut self, error: GuessError) -> Result<GameState, GuessError> {
        self.hint = error.to_string();
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Clue;
    use crate::rules::Difficulty;

    fn config() -> GameConfig {
        GameConfig::embedded().unwrap()
    }

    fn game<'a>(config: &'a GameConfig, target: &str, rules: GameRules) -> Game<'a> {
        Game::new(config, Word::new(target).unwrap(), Tier::MAX, rules, false)
    }

    fn type_word(game: &mut Game<'_>, word: &str) {
        for letter in word.chars() {
            game.type_letter(letter);
        }
    }

    #[test]
    fn typing_and_backspace() {
        let config = config();
        let mut game = game(&config, "rice", GameRules::default());
        type_word(&mut game, "RISEN");
        assert_eq!(game.current(), "rise");
        assert!(game.backspace());
        assert_eq!(game.current(), "ris");
        assert!(!game.type_letter('1'));
        assert!(game.in_progress());
    }

    #[test]
    fn restricted_keyboard_ignores_untaught_letters() {
        let config = config();
        let mut game = Game::new(
            &config,
            Word::new("sat").unwrap(),
            Tier::MIN,
            GameRules::default(),
            false,
        );
        assert!(game.type_letter('s'));
        assert!(!game.type_letter('r'));
        assert!(game.type_letter('i'));
        assert_eq!(game.current(), "si");
        assert_eq!(
            game.submit_word("rat"),
            Err(GuessError::LetterNotAllowed('r'))
        );

        let rules = GameRules {
            restrict_keyboard: false,
            ..GameRules::default()
        };
        let mut open = Game::new(&config, Word::new("sat").unwrap(), Tier::MIN, rules, false);
        assert!(open.type_letter('r'));
    }

    #[test]
    fn rejected_guesses_are_not_consumed() {
        let config = config();
        let mut game = game(&config, "rice", GameRules::default());

        type_word(&mut game, "ric");
        assert_eq!(game.submit(), Err(GuessError::TooShort));
        assert_eq!(game.hint(), "Too short");
        assert_eq!(game.current(), "ric");

        assert_eq!(game.submit_word("qzxv"), Err(GuessError::NotAWord));
        assert_eq!(game.hint(), "Not a valid word");
        assert_eq!(game.submit_word("rices"), Err(GuessError::TooLong));
        assert!(game.guesses().is_empty());
        assert_eq!(game.guesses_left(), 6);
    }

    #[test]
    fn winning_game() {
        let config = config();
        let mut game = game(&config, "rice", GameRules::default());
        assert_eq!(game.submit_word("rise"), Ok(GameState::Playing));
        assert_eq!(game.hint(), "R correct, I correct, S no, E correct");
        assert_eq!(game.submit_word("rice"), Ok(GameState::Won));
        assert_eq!(
            game.hint(),
            "You won! The answer was RICE. (Enter to play again)"
        );
        assert_eq!(game.submit_word("rise"), Err(GuessError::GameOver));
        assert!(!game.type_letter('a'));
        assert_eq!(game.guesses().len(), 2);
    }

    #[test]
    fn losing_game() {
        let config = config();
        let rules = GameRules {
            max_guesses: 2,
            ..GameRules::default()
        };
        let mut game = Game::new(&config, Word::new("rice").unwrap(), Tier::MAX, rules, true);
        assert_eq!(game.submit_word("rise"), Ok(GameState::Playing));
        assert_eq!(game.submit_word("rise"), Ok(GameState::Lost));
        assert_eq!(
            game.hint(),
            "You lost! The answer was RICE. (Enter to play a random game)"
        );
        assert!(game.state().is_over());
        assert!(!game.in_progress());
    }

    #[test]
    fn give_up_needs_a_guess() {
        let config = config();
        let mut game = game(&config, "rice", GameRules::default());
        assert_eq!(game.give_up(), Err(GuessError::NoGuessesYet));
        game.submit_word("rise").unwrap();
        assert_eq!(game.give_up(), Ok(()));
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.hint(), "The answer was RICE. (Enter to play again)");
        assert_eq!(game.give_up(), Err(GuessError::GameOver));
    }

    #[test]
    fn hard_mode_rejects_contradicting_guess() {
        let config = config();
        let hard = GameRules {
            difficulty: Difficulty::Hard,
            ..GameRules::default()
        };
        let mut game = game(&config, "rice", hard);
        game.submit_word("rise").unwrap();
        let result = game.submit_word("nice");
        assert!(matches!(result, Err(GuessError::Violation(_))));
        assert_eq!(game.hint(), "1st letter must be R");
        assert_eq!(game.guesses().len(), 1);

        let mut lenient = game_with_normal(&config);
        lenient.submit_word("rise").unwrap();
        assert_eq!(lenient.submit_word("nice"), Ok(GameState::Playing));
    }

    fn game_with_normal(config: &GameConfig) -> Game<'_> {
        game(config, "rice", GameRules::default())
    }

    #[test]
    fn letter_states_follow_guesses() {
        let config = config();
        let mut game = game(&config, "rice", GameRules::default());
        game.submit_word("rise").unwrap();
        let states = game.letter_states();
        assert_eq!(states.get(b'r'), Some(Clue::Correct));
        assert_eq!(states.get(b's'), Some(Clue::Absent));
        assert_eq!(states.get(b'c'), None);
    }
}
