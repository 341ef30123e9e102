//! Seeded random source for target selection
//!
//! A seed string is hashed with SHA-256 into the 32-byte seed of a
//! `ChaCha8Rng`, so the same seed gives the same sequence of picks on every
//! platform. Without a seed the generator is seeded from the thread RNG.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Derive the ChaCha seed for a seed string
fn seed_bytes(seed: &str) -> [u8; 32] {
    Sha256::digest(seed.as_bytes()).into()
}

fn normalize(seed: Option<&str>) -> Option<String> {
    seed.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn make_rng(seed: Option<&str>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::from_seed(seed_bytes(seed)),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Deterministic pick source owned by one game session
///
/// # Examples
/// ```
/// use phonics_wordle::selection::SeededRng;
///
/// let words = ["sat", "pin", "tap", "nip"];
/// let mut a = SeededRng::new(Some("20220110"));
/// let mut b = SeededRng::new(Some("20220110"));
///
/// for _ in 0..10 {
///     assert_eq!(a.pick(&words), b.pick(&words));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: Option<String>,
    rng: ChaCha8Rng,
}

impl SeededRng {
    /// Create a generator; blank seeds count as no seed
    #[must_use]
    pub fn new(seed: Option<&str>) -> Self {
        let seed = normalize(seed);
        let rng = make_rng(seed.as_deref());
        Self { seed, rng }
    }

    /// Restart from `seed`, or from fresh entropy when `seed` is `None`
    pub fn reset(&mut self, seed: Option<&str>) {
        self.seed = normalize(seed);
        self.rng = make_rng(self.seed.as_deref());
        debug!("RNG reset (seed: {:?})", self.seed);
    }

    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Pick one element, consuming exactly one draw
    ///
    /// Returns `None` for an empty slice without consuming a draw.
    pub fn pick<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        candidates.get(index)
    }
}
