//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load the entries of a newline-delimited word list
///
/// Lines are trimmed and lowercased; blank lines are skipped. Order and
/// placeholder (`*`) entries are preserved, since tier cutoffs index into
/// the target list.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use phonics_wordle::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_str(&content))
}

/// Split `content` into word list entries, see [`load_from_file`]
#[must_use]
pub fn entries_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to owned entries
///
/// # Examples
/// ```
/// use phonics_wordle::wordlists::loader::entries_from_slice;
/// use phonics_wordle::wordlists::TARGETS;
///
/// let entries = entries_from_slice(TARGETS);
/// assert_eq!(entries.len(), TARGETS.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
