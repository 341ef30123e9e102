//! Difficulty tiers of the phonics curriculum
//!
//! Each tier grants a set of letters and a slice of the ordered target list.
//! The slice ends at a *boundary word*: the last word taught at that stage.
//! Tiers alternate between a new letter group and the tricky words that go
//! with it, so even tiers reuse the letters of the tier before them.

use super::ConfigError;
use crate::core::LetterSet;
use std::fmt;

/// A curriculum difficulty tier, `1..=14`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(14);
    pub const DEFAULT: Self = Self(4);

    /// Create a tier, or `None` if `value` is outside `1..=14`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position in a tier table
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Every tier from easiest to hardest
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static description of one curriculum stage
#[derive(Debug, Clone, Copy)]
pub struct TierStage {
    /// Short label for menus and reports
    pub label: &'static str,
    /// Last target word taught at this stage
    pub boundary: &'static str,
    /// Every letter a target may use at this stage
    pub letters: &'static str,
}

const GROUP_1: &str = "satpin";
const GROUP_2: &str = "satpinckehrmd";
const GROUP_3: &str = "satpinckehrmdgoulfb";
const GROUP_4: &str = "satpinckehrmdgoulfbj";
const GROUP_5: &str = "satpinckehrmdgoulfbjzwv";
const GROUP_6: &str = "satpinckehrmdgoulfbjzwvyx";
const GROUP_7: &str = "satpinckehrmdgoulfbjzwvyxq";
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The shipped phonics stages, tier 1 first
#[rustfmt::skip]
pub const PHONICS_STAGES: [TierStage; 14] = [
    TierStage { label: "SATPIN", boundary: "insist", letters: GROUP_1 },
    TierStage { label: "SATPIN + tricky words", boundary: "are", letters: GROUP_1 },
    TierStage { label: "CKEHRMD", boundary: "dentist", letters: GROUP_2 },
    TierStage { label: "CKEHRMD + tricky words", boundary: "there", letters: GROUP_2 },
    TierStage { label: "GOULFB", boundary: "bucket", letters: GROUP_3 },
    TierStage { label: "GOULFB + tricky words", boundary: "give", letters: GROUP_3 },
    TierStage { label: "AI J OA IE EE OR", boundary: "sweetcorn", letters: GROUP_4 },
    TierStage { label: "AI J OA IE EE OR + tricky words", boundary: "more", letters: GROUP_4 },
    TierStage { label: "Z W NG V OO", boundary: "goose", letters: GROUP_5 },
    TierStage { label: "Z W NG V OO + tricky words", boundary: "made", letters: GROUP_5 },
    TierStage { label: "Y X CH SH TH", boundary: "thrill", letters: GROUP_6 },
    TierStage { label: "Y X CH SH TH + tricky words", boundary: "always", letters: GROUP_6 },
    TierStage { label: "QU OU OI UE ER AR", boundary: "marbles", letters: GROUP_7 },
    TierStage { label: "Alternative spellings", boundary: "salute", letters: ALPHABET },
];

/// A tier resolved against a concrete vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSpec {
    pub label: String,
    /// Index of the boundary word; entries `0..=cutoff` are in play
    pub cutoff: usize,
    pub letters: LetterSet,
}

/// Tier → (vocabulary cutoff, permitted letters)
///
/// Construction guarantees the curriculum invariant: for tiers `i < j`,
/// `letters(i) ⊆ letters(j)` and `cutoff(i) <= cutoff(j)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<TierSpec>,
}

impl TierTable {
    /// Resolve `stages` against the ordered `vocabulary`
    ///
    /// # Errors
    /// - `ConfigError::TierCount` if there is not exactly one stage per tier
    /// - `ConfigError::MissingBoundary` if a boundary word is not in the list
    /// - `ConfigError::NonMonotonicTier` if a stage loses letters or words
    ///   compared to the stage before it
    pub fn resolve<S: AsRef<str>>(
        vocabulary: &[S],
        stages: &[TierStage],
    ) -> Result<Self, ConfigError> {
        if stages.len() != usize::from(Tier::MAX.value()) {
            return Err(ConfigError::TierCount(stages.len()));
        }

        let mut tiers: Vec<TierSpec> = Vec::with_capacity(stages.len());
        for (i, stage) in stages.iter().enumerate() {
            let cutoff = vocabulary
                .iter()
                .position(|w| w.as_ref() == stage.boundary)
                .ok_or_else(|| ConfigError::MissingBoundary(stage.boundary.to_string()))?;
            let spec = TierSpec {
                label: stage.label.to_string(),
                cutoff,
                letters: LetterSet::from_letters(stage.letters),
            };

            if let Some(previous) = tiers.last()
                && (spec.cutoff < previous.cutoff || !previous.letters.is_subset(spec.letters))
            {
                return Err(ConfigError::NonMonotonicTier(i + 1));
            }
            tiers.push(spec);
        }

        Ok(Self { tiers })
    }

    /// Spec of `tier`
    #[must_use]
    pub fn get(&self, tier: Tier) -> &TierSpec {
        // resolve() only succeeds with one entry per tier
        &self.tiers[tier.index()]
    }

    /// Letters a target may use at `tier`
    #[must_use]
    pub fn letters(&self, tier: Tier) -> LetterSet {
        self.get(tier).letters
    }

    /// Iterate `(tier, spec)` from easiest to hardest
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &TierSpec)> {
        Tier::all().zip(self.tiers.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::TARGETS;

    #[test]
    fn tier_bounds() {
        assert_eq!(Tier::new(0), None);
        assert_eq!(Tier::new(1), Some(Tier::MIN));
        assert_eq!(Tier::new(14), Some(Tier::MAX));
        assert_eq!(Tier::new(15), None);
        assert_eq!(Tier::default().value(), 4);
        assert_eq!(Tier::all().count(), 14);
        assert_eq!(Tier::MIN.index(), 0);
    }

    #[test]
    fn shipped_stages_resolve() {
        let table = TierTable::resolve(TARGETS, &PHONICS_STAGES).unwrap();
        assert_eq!(table.iter().count(), 14);
        assert_eq!(TARGETS[table.get(Tier::MIN).cutoff], "insist");
        assert_eq!(TARGETS[table.get(Tier::MAX).cutoff], "salute");
        assert_eq!(table.letters(Tier::MAX), LetterSet::ALL);
    }

    #[test]
    fn shipped_tiers_are_monotonic() {
        let table = TierTable::resolve(TARGETS, &PHONICS_STAGES).unwrap();
        let specs: Vec<_> = table.iter().collect();
        for (i, (_, lower)) in specs.iter().enumerate() {
            for (_, higher) in &specs[i + 1..] {
                assert!(lower.letters.is_subset(higher.letters));
                assert!(lower.cutoff <= higher.cutoff);
            }
        }
    }

    #[test]
    fn tricky_tiers_keep_letters_and_grow_words() {
        let table = TierTable::resolve(TARGETS, &PHONICS_STAGES).unwrap();
        let one = table.get(Tier::new(1).unwrap());
        let two = table.get(Tier::new(2).unwrap());
        assert_eq!(one.letters, two.letters);
        assert!(two.cutoff > one.cutoff);
    }

    #[test]
    fn missing_boundary_is_reported() {
        let vocabulary = ["sat", "pin"];
        assert_eq!(
            TierTable::resolve(&vocabulary, &PHONICS_STAGES),
            Err(ConfigError::MissingBoundary("insist".to_string()))
        );
    }

    #[test]
    fn wrong_stage_count_is_reported() {
        assert_eq!(
            TierTable::resolve(TARGETS, &PHONICS_STAGES[..3]),
            Err(ConfigError::TierCount(3))
        );
    }

    #[test]
    fn shrinking_stage_is_rejected() {
        let mut stages = PHONICS_STAGES;
        stages[5].letters = GROUP_1;
        assert_eq!(
            TierTable::resolve(TARGETS, &stages),
            Err(ConfigError::NonMonotonicTier(6))
        );

        let mut stages = PHONICS_STAGES;
        stages[3].boundary = "insist";
        assert_eq!(
            TierTable::resolve(TARGETS, &stages),
            Err(ConfigError::NonMonotonicTier(4))
        );
    }
}
