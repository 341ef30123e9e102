//! Word lists
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus the guess dictionary built from them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};
