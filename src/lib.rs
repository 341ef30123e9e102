//! Phonics Wordle
//!
//! Rule engine for a Wordle-style puzzle graded by a phonics curriculum:
//! targets of 3 to 5 letters, drawn from tiers that unlock letters and words
//! in teaching order, with seeded replays and shareable challenge links.
//!
//! # Quick Start
//!
//! ```rust
//! use phonics_wordle::config::{GameConfig, GameSettings};
//! use phonics_wordle::game::{GameState, Session};
//!
//! let config = GameConfig::embedded().unwrap();
//! let settings = GameSettings {
//!     seed: Some("20220110".to_string()),
//!     ..GameSettings::default()
//! };
//! let mut session = Session::start(&config, settings).unwrap();
//!
//! let target = session.game().target().text().to_string();
//! let state = session.game_mut().submit_word(&target).unwrap();
//! assert_eq!(state, GameState::Won);
//! ```

// Core domain types
pub mod core;

// Hard-mode validation and keyboard state
pub mod rules;

// Tiers, vocabulary filter, seeded target selection
pub mod selection;

// Challenge tokens and share links
pub mod challenge;

// Word lists
pub mod wordlists;

// Game data and per-game settings
pub mod config;

// Game state machine and sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
