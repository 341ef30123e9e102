//! Word data audit
//!
//! Tabulates how many targets each (tier, length) pair offers and checks the
//! invariants the game relies on: every pair is playable, tiers only ever
//! grow, and every target survives a trip through a challenge token.

use crate::challenge::{decode, encode};
use crate::config::GameConfig;
use crate::core::{LetterSet, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::selection::Tier;
use log::debug;
use rayon::prelude::*;

/// Number of supported word lengths
pub const LENGTH_COUNT: usize = MAX_WORD_LENGTH - MIN_WORD_LENGTH + 1;

/// Eligible target counts of one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRow {
    pub tier: Tier,
    pub label: String,
    pub letters: LetterSet,
    pub cutoff: usize,
    /// Targets of each length, shortest first
    pub counts: [usize; LENGTH_COUNT],
}

/// Result of auditing a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub target_entries: usize,
    pub dictionary_words: usize,
    pub rows: Vec<AuditRow>,
    pub monotonic: bool,
    pub round_trips: usize,
    /// Targets whose token does not decode back to the word
    pub codec_failures: Vec<String>,
}

impl AuditReport {
    /// Whether every (tier, length) pair has at least one target
    #[must_use]
    pub fn all_covered(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.counts.iter().all(|&n| n > 0))
    }

    /// Whether every check passed
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.all_covered() && self.monotonic && self.codec_failures.is_empty()
    }
}

fn audit_row(config: &GameConfig, tier: Tier) -> AuditRow {
    let spec = config.tiers().get(tier);
    let mut counts = [0; LENGTH_COUNT];
    for (slot, length) in counts.iter_mut().zip(MIN_WORD_LENGTH..=MAX_WORD_LENGTH) {
        *slot = config.vocabulary().eligible(length, spec).len();
    }
    AuditRow {
        tier,
        label: spec.label.clone(),
        letters: spec.letters,
        cutoff: spec.cutoff,
        counts,
    }
}

fn is_monotonic(rows: &[AuditRow]) -> bool {
    rows.windows(2).all(|pair| {
        let (lower, higher) = (&pair[0], &pair[1]);
        lower.letters.is_subset(higher.letters)
            && lower.cutoff <= higher.cutoff
            && lower
                .counts
                .iter()
                .zip(&higher.counts)
                .all(|(a, b)| a <= b)
    })
}

/// Audit the word data of `config`
///
/// # Examples
/// ```
/// use phonics_wordle::commands::run_audit;
/// use phonics_wordle::config::GameConfig;
///
/// let config = GameConfig::embedded().unwrap();
/// let report = run_audit(&config);
/// assert!(report.is_healthy());
/// assert_eq!(report.rows.len(), 14);
/// ```
#[must_use]
pub fn run_audit(config: &GameConfig) -> AuditReport {
    let tiers: Vec<Tier> = Tier::all().collect();
    let rows: Vec<AuditRow> = tiers
        .par_iter()
        .map(|&tier| audit_row(config, tier))
        .collect();

    let words: Vec<&str> = config.vocabulary().words().collect();
    let codec_failures: Vec<String> = words
        .par_iter()
        .filter(|&&word| decode(&encode(word)).as_deref() != Ok(word))
        .map(|&word| word.to_string())
        .collect();

    debug!(
        "Audited {} tiers and {} challenge tokens",
        rows.len(),
        words.len()
    );

    AuditReport {
        target_entries: config.vocabulary().len(),
        dictionary_words: config.dictionary().len(),
        monotonic: is_monotonic(&rows),
        rows,
        round_trips: words.len(),
        codec_failures,
    }
}
