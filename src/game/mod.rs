//! Playing the puzzle
//!
//! [`Game`] is one target and its guesses. [`Session`] owns the settings
//! and random stream that produce successive games.

mod round;
mod session;
mod share;

pub use round::{Game, GameState, GuessError};
pub use session::{INVALID_CHALLENGE_HINT, Session, SessionError};
pub use share::{EmojiPalette, ShareContent, emoji_row, emoji_rows, share_text};
