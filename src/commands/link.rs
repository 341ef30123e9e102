//! Challenge link commands
//!
//! Builds a challenge link for a chosen word, or decodes a token (or a whole
//! link) back into its word and checks whether it can be played.

use crate::challenge::{LinkParams, challenge_link, decode, encode};
use crate::config::GameConfig;
use crate::selection::{ChallengeError, TargetSelector, Tier};

/// A challenge word with its token, link and playability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeReport {
    pub word: String,
    pub token: String,
    pub tier: Tier,
    /// Easiest tier whose letters spell the word
    pub lowest_tier: Option<Tier>,
    pub link: String,
    /// Why the challenge would be rejected at `tier`
    pub problem: Option<ChallengeError>,
}

fn lowest_tier(config: &GameConfig, word: &str) -> Option<Tier> {
    config
        .tiers()
        .iter()
        .find(|(_, spec)| spec.letters.allows(word))
        .map(|(tier, _)| tier)
}

fn report(
    config: &GameConfig,
    word: String,
    token: String,
    tier: Tier,
    base_url: &str,
) -> ChallengeReport {
    let selector = TargetSelector::new(config, None);
    let problem = selector.select_challenge(&token, tier).err();
    ChallengeReport {
        lowest_tier: lowest_tier(config, &word),
        link: challenge_link(base_url, &word, tier),
        word,
        token,
        tier,
        problem,
    }
}

/// Build the challenge link for `word` at `tier`
///
/// # Errors
/// Returns `ChallengeError` if the word can't be played at `tier`.
///
/// # Examples
/// ```
/// use phonics_wordle::commands::create_challenge;
/// use phonics_wordle::config::GameConfig;
/// use phonics_wordle::selection::Tier;
///
/// let config = GameConfig::embedded().unwrap();
/// let report = create_challenge(&config, "Plane", Tier::MAX, "https://x.org/").unwrap();
/// assert_eq!(report.link, "https://x.org/?challenge=cGxhbmU&difficulty=14");
/// ```
pub fn create_challenge(
    config: &GameConfig,
    word: &str,
    tier: Tier,
    base_url: &str,
) -> Result<ChallengeReport, ChallengeError> {
    let word = word.trim().to_lowercase();
    let token = encode(&word);
    let report = report(config, word, token, tier, base_url);
    match &report.problem {
        Some(problem) => Err(problem.clone()),
        None => Ok(report),
    }
}

/// Decode a challenge token or link
///
/// A bare token is checked at the hardest tier; a link at its own
/// `difficulty`.
///
/// # Errors
/// Returns `ChallengeError::Decode` if there is no token or it is malformed.
/// Words that decode but can't be played are reported in
/// [`ChallengeReport::problem`] instead.
pub fn inspect_challenge(
    config: &GameConfig,
    token_or_link: &str,
    base_url: &str,
) -> Result<ChallengeReport, ChallengeError> {
    let input = token_or_link.trim();
    let (token, tier) = if input.contains(['?', '=']) {
        let params = LinkParams::parse(input);
        let token = params.challenge().unwrap_or_default().to_string();
        (token, params.tier())
    } else {
        (input.to_string(), Tier::MAX)
    };

    let word = decode(&token)?.trim().to_lowercase();
    Ok(report(config, word, token, tier, base_url))
}
