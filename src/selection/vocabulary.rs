//! Ordered target vocabulary and the per-tier eligibility filter

use super::TierSpec;
use crate::core::Word;

/// Entries containing this character are placeholders (section headings,
/// reserved words) and are never selectable
pub const PLACEHOLDER_MARKER: char = '*';

/// Whether `entry` is a placeholder rather than a real word
#[inline]
#[must_use]
pub fn is_placeholder(entry: &str) -> bool {
    entry.contains(PLACEHOLDER_MARKER)
}

/// The curated target list, in curriculum order
///
/// Order matters: a tier's cutoff is an index into this list. Placeholder
/// entries are kept so indices match the source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Build from raw entries; blank lines are dropped and text is lowercased
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Raw entries, placeholders included
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Real words in the list, in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|e| !is_placeholder(e))
    }

    /// Targets playable at `tier` with `length` letters
    ///
    /// Keeps entries up to and including the tier's cutoff whose length is
    /// `length`, whose letters are all permitted by the tier, and which are
    /// not placeholders. The vocabulary itself is left untouched.
    #[must_use]
    pub fn eligible(&self, length: usize, tier: &TierSpec) -> Vec<Word> {
        self.entries
            .iter()
            .take(tier.cutoff.saturating_add(1))
            .filter(|e| e.len() == length && !is_placeholder(e) && tier.letters.allows(e))
            .filter_map(|e| Word::new(e.as_str()).ok())
            .collect()
    }
}
