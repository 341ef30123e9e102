//! Formatting utilities for terminal output

use crate::core::{Clue, CluedGuess, MAX_WORD_LENGTH};
use crate::game::Game;
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A letter tile coloured by its clue; `None` is an unclued letter
#[must_use]
pub fn letter_tile(letter: u8, clue: Option<Clue>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase() as char);
    match clue {
        Some(Clue::Correct) => text.black().on_green().bold(),
        Some(Clue::Elsewhere) => text.black().on_yellow().bold(),
        Some(Clue::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// One locked-in guess as a row of tiles
#[must_use]
pub fn guess_row(guess: &CluedGuess) -> String {
    guess
        .letters()
        .iter()
        .map(|c| letter_tile(c.letter, Some(c.clue)).to_string())
        .collect()
}

/// The guess being typed, padded with blanks to `length`
#[must_use]
pub fn pending_row(current: &str, length: usize) -> String {
    let typed: String = current
        .bytes()
        .map(|b| letter_tile(b, None).to_string())
        .collect();
    let blanks = " _ ".repeat(length.saturating_sub(current.len()));
    format!("{typed}{}", blanks.bright_black())
}

/// Every row of the board: guesses, the current guess, then empty rows
#[must_use]
pub fn render_board(game: &Game<'_>) -> String {
    let length = game.word_length();
    let mut rows: Vec<String> = game.guesses().iter().map(guess_row).collect();
    if !game.state().is_over() && game.guesses_left() > 0 {
        rows.push(pending_row(game.current(), length));
    }
    let empty = " · ".repeat(length).bright_black().to_string();
    while rows.len() < game.rules().max_guesses {
        rows.push(empty.clone());
    }
    rows.join("\n")
}

/// Keyboard coloured by the best clue of each letter
///
/// Letters that can't be typed at the current tier are shown as dots.
#[must_use]
pub fn render_keyboard(game: &Game<'_>) -> String {
    let states = game.letter_states();
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|b| {
                    if game.is_letter_allowed(b as char) {
                        letter_tile(b, states.get(b)).to_string()
                    } else {
                        " · ".bright_black().to_string()
                    }
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Horizontal bar of `width` cells, `value` out of `max` filled
#[must_use]
pub fn progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Width of a board row in terminal columns
#[must_use]
pub const fn board_width(length: usize) -> usize {
    let length = if length > MAX_WORD_LENGTH {
        MAX_WORD_LENGTH
    } else {
        length
    };
    length * 3
}
