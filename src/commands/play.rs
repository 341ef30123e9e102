//! Interactive play in the terminal
//!
//! Line-based: a line starting with `:` is a command, a blank line moves on
//! to the next game and anything else is a guess. Input and output are
//! generic so scripted games can drive the loop.

use crate::game::{EmojiPalette, GameState, Session, ShareContent, share_text};
use crate::output::render_session;
use crate::selection::Tier;
use log::debug;
use std::io::{BufRead, Write};

/// Options of the play loop that don't affect the game itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    /// Page that share links point at
    pub base_url: String,
    pub palette: EmojiPalette,
}

const HELP: &str = "\
Type a word and press Enter to guess.
Press Enter on an empty line for the next game once this one is over.
Commands:
  :give up       reveal the answer (after one guess)
  :new           next game (once this one is over)
  :length N      play N-letter words (3-5)
  :tier N        play tier N (1-14)
  :share         link and emoji rows for this game
  :say           link and spoken clues of the last guess
  :challenge     link that lets a friend play this word
  :help          show this help
  :quit          leave";

enum Action {
    Quit,
    Help,
    Next,
    GiveUp,
    Length(String),
    Tier(String),
    Share(ShareContent),
    Challenge,
    Unknown(String),
    Guess(String),
}

fn parse_action(line: &str, palette: EmojiPalette) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Next;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Action::Guess(line.to_string());
    };

    let command = command.trim();
    let (name, argument) = command.split_once(' ').unwrap_or((command, ""));
    match name.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Action::Quit,
        "help" | "h" => Action::Help,
        "new" | "n" => Action::Next,
        "give" | "giveup" => Action::GiveUp,
        "length" => Action::Length(argument.trim().to_string()),
        "tier" => Action::Tier(argument.trim().to_string()),
        "share" => Action::Share(ShareContent::Emoji(palette)),
        "say" => Action::Share(ShareContent::Spoken),
        "challenge" => Action::Challenge,
        _ => Action::Unknown(line.to_string()),
    }
}

/// Run the interactive loop until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the word
/// data can't produce a next game.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    options: &PlayOptions,
    input: R,
    mut output: W,
) -> Result<(), String> {
    let io_error = |e: std::io::Error| e.to_string();

    writeln!(output, "Phonics Wordle (type ':help' for commands)").map_err(io_error)?;
    write!(output, "{}", render_session(session)).map_err(io_error)?;

    for line in input.lines() {
        let line = line.map_err(io_error)?;
        let game = session.game_mut();

        match parse_action(&line, options.palette) {
            Action::Quit => break,
            Action::Help => {
                writeln!(output, "{HELP}").map_err(io_error)?;
                continue;
            }
            Action::Next => {
                if game.state() != GameState::Playing {
                    session.next_game().map_err(|e| e.to_string())?;
                }
            }
            Action::GiveUp => {
                if let Err(e) = game.give_up() {
                    game.set_hint(e.to_string());
                }
            }
            Action::Length(argument) => match argument.parse::<usize>() {
                Ok(length) => {
                    if let Err(e) = session.set_length(length) {
                        session.game_mut().set_hint(e.to_string());
                    }
                }
                Err(_) => game.set_hint("Length must be 3, 4 or 5"),
            },
            Action::Tier(argument) => match argument.parse().ok().and_then(Tier::new) {
                Some(tier) => {
                    if let Err(e) = session.set_tier(tier) {
                        session.game_mut().set_hint(e.to_string());
                    }
                }
                None => game.set_hint("Tier must be between 1 and 14"),
            },
            Action::Share(content) => {
                // results are only shared once the game is over
                let content = match content {
                    ShareContent::Emoji(_) if !game.state().is_over() => ShareContent::LinkOnly,
                    other => other,
                };
                let link = session.share_link(&options.base_url);
                let text = share_text(&link, session.game().guesses(), content);
                writeln!(output, "\n{text}\n").map_err(io_error)?;
                continue;
            }
            Action::Challenge => {
                let link = session.challenge_link(&options.base_url);
                writeln!(output, "\n{link}\n").map_err(io_error)?;
                continue;
            }
            Action::Unknown(line) => {
                game.set_hint(format!("Unknown command {line} (type :help)"));
            }
            Action::Guess(word) => {
                // a rejected guess leaves its message in the hint
                if let Err(e) = game.submit_word(&word) {
                    debug!("Guess {word:?} rejected: {e}");
                }
            }
        }

        write!(output, "{}", render_session(session)).map_err(io_error)?;
    }

    writeln!(output, "Thanks for playing!").map_err(io_error)?;
    Ok(())
}
