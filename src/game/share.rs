//! Text for sharing a finished game

use crate::core::{Clue, CluedGuess, CluedLetter};

/// Emoji used for the three clues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmojiPalette {
    /// ⬛ 🟨 🟩
    #[default]
    Standard,
    /// ⬛ 🟦 🟧
    ColorBlind,
}

impl EmojiPalette {
    /// Symbols for `[Absent, Elsewhere, Correct]`
    #[must_use]
    pub const fn symbols(self) -> [&'static str; 3] {
        match self {
            Self::Standard => ["⬛", "🟨", "🟩"],
            Self::ColorBlind => ["⬛", "🟦", "🟧"],
        }
    }

    #[must_use]
    pub const fn symbol(self, clue: Clue) -> &'static str {
        self.symbols()[clue.index()]
    }
}

/// What follows the link in shared text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareContent {
    LinkOnly,
    /// Spoken description of the last guess
    Spoken,
    /// One emoji row per guess
    Emoji(EmojiPalette),
}

/// One emoji per clued letter
#[must_use]
pub fn emoji_row(letters: &[CluedLetter], palette: EmojiPalette) -> String {
    letters.iter().map(|c| palette.symbol(c.clue)).collect()
}

/// One emoji row per guess, separated by newlines
#[must_use]
pub fn emoji_rows(guesses: &[CluedGuess], palette: EmojiPalette) -> String {
    guesses
        .iter()
        .map(|g| emoji_row(g.letters(), palette))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `link`, then a blank line and `content` when there is any
///
/// # Examples
/// ```
/// use phonics_wordle::core::{CluedGuess, Word};
/// use phonics_wordle::game::{EmojiPalette, ShareContent, share_text};
///
/// let target = Word::new("rice").unwrap();
/// let guesses = [
///     CluedGuess::new(Word::new("rise").unwrap(), &target),
///     CluedGuess::new(Word::new("rice").unwrap(), &target),
/// ];
/// let text = share_text("https://x.org/", &guesses, ShareContent::Emoji(EmojiPalette::Standard));
/// assert_eq!(text, "https://x.org/\n\n🟩🟩⬛🟩\n🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(link: &str, guesses: &[CluedGuess], content: ShareContent) -> String {
    let body = match content {
        ShareContent::LinkOnly => None,
        ShareContent::Spoken => guesses.last().map(CluedGuess::describe),
        ShareContent::Emoji(palette) => Some(emoji_rows(guesses, palette)),
    };
    match body {
        Some(body) if !body.is_empty() => format!("{link}\n\n{body}"),
        _ => link.to_string(),
    }
}
