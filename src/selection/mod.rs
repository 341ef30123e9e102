//! Target selection
//!
//! Difficulty tiers, the per-tier vocabulary filter, the seeded random
//! source, and the selector that combines them into random, replayed and
//! challenge targets.

mod rng;
mod selector;
mod tiers;
mod vocabulary;

pub use rng::SeededRng;
pub use selector::{ChallengeError, TargetSelector};
pub use tiers::{PHONICS_STAGES, Tier, TierSpec, TierStage, TierTable};
pub use vocabulary::{PLACEHOLDER_MARKER, Vocabulary, is_placeholder};

use std::fmt;

/// Word data or tier tables that cannot support the requested game
///
/// These indicate a data or programming error rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No target of `length` letters is playable at `tier`
    NoCandidates { length: usize, tier: Tier },
    /// A tier boundary word is missing from the target list
    MissingBoundary(String),
    /// The stage table does not have one entry per tier
    TierCount(usize),
    /// This tier (1-based) has fewer letters or words than the one before
    NonMonotonicTier(usize),
    /// A word length outside `3..=5` was requested
    UnsupportedLength(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates { length, tier } => {
                write!(f, "No {length}-letter targets are available at tier {tier}")
            }
            Self::MissingBoundary(word) => {
                write!(f, "Tier boundary word '{word}' is not in the target list")
            }
            Self::TierCount(count) => {
                write!(f, "Expected {} tier stages, got {count}", Tier::MAX)
            }
            Self::NonMonotonicTier(tier) => {
                write!(f, "Tier {tier} has fewer letters or words than the tier before it")
            }
            Self::UnsupportedLength(length) => {
                write!(f, "Word length {length} is not supported")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
