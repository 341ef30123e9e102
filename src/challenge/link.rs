//! Share links and their query parameters
//!
//! Two link shapes exist:
//! - challenge: `?challenge=<token>&difficulty=<tier>`
//! - seed: `?seed=<seed>&length=<n>&game=<n>`
//!
//! Parameters outside their bounds fall back to defaults instead of failing.

use super::encode;
use crate::core::{DEFAULT_WORD_LENGTH, is_supported_length};
use crate::selection::Tier;
use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use rustc_hash::FxHashMap;

/// Highest game number a link may request
pub const MAX_GAME_NUMBER: u32 = 1000;

/// Characters escaped in query values: everything but unreserved ones
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Query parameters of a share link
///
/// # Examples
/// ```
/// use phonics_wordle::challenge::LinkParams;
///
/// let params = LinkParams::parse("https://example.org/?seed=20220110&length=5&game=3");
/// assert_eq!(params.seed(), Some("20220110"));
/// assert_eq!(params.word_length(), 5);
/// assert_eq!(params.game_number(), 3);
/// assert_eq!(params.tier().value(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkParams {
    values: FxHashMap<String, String>,
}

impl LinkParams {
    /// Parse the query part of `link`
    ///
    /// Accepts a full URL, a bare query string (with or without the leading
    /// `?`), and ignores any `#fragment`. Later duplicates win.
    #[must_use]
    pub fn parse(link: &str) -> Self {
        let without_fragment = link.split('#').next().unwrap_or_default();
        let query = match without_fragment.split_once('?') {
            Some((_, query)) => query,
            None if without_fragment.contains('=') => without_fragment,
            None => "",
        };

        let values = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { values }
    }

    /// Raw value of parameter `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn number<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.trim().parse().ok())
    }

    /// Encoded challenge token, if any
    #[must_use]
    pub fn challenge(&self) -> Option<&str> {
        self.get("challenge").filter(|v| !v.trim().is_empty())
    }

    /// Seed, if any
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.get("seed")
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Word length in `3..=5`, default 4
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.number("length")
            .filter(|&n| is_supported_length(n))
            .unwrap_or(DEFAULT_WORD_LENGTH)
    }

    /// Tier in `1..=14`
    ///
    /// Defaults to tier 4, or to the hardest tier for challenge links so
    /// that a challenge without a tier still accepts any word.
    #[must_use]
    pub fn tier(&self) -> Tier {
        let fallback = if self.challenge().is_some() {
            Tier::MAX
        } else {
            Tier::DEFAULT
        };
        self.number("difficulty")
            .and_then(Tier::new)
            .unwrap_or(fallback)
    }

    /// Game number in `1..=1000`, default 1
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.number("game")
            .filter(|n| (1..=MAX_GAME_NUMBER).contains(n))
            .unwrap_or(1)
    }
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// `origin + path` of `base_url`, with any query or fragment removed
#[must_use]
pub fn base_of(base_url: &str) -> &str {
    let end = base_url.find(['?', '#']).unwrap_or(base_url.len());
    &base_url[..end]
}

/// Link that replays `target` as a challenge at `tier`
///
/// # Examples
/// ```
/// use phonics_wordle::challenge::challenge_link;
/// use phonics_wordle::selection::Tier;
///
/// let link = challenge_link("https://example.org/play", "plane", Tier::MAX);
/// assert_eq!(link, "https://example.org/play?challenge=cGxhbmU&difficulty=14");
/// ```
#[must_use]
pub fn challenge_link(base_url: &str, target: &str, tier: Tier) -> String {
    format!(
        "{}?challenge={}&difficulty={}",
        base_of(base_url),
        encode(target),
        tier
    )
}

/// Link that replays game `game_number` of `seed`
///
/// The tier is only written when it differs from [`Tier::DEFAULT`], which is
/// what a link without `difficulty` plays at.
#[must_use]
pub fn seed_link(
    base_url: &str,
    seed: &str,
    length: usize,
    tier: Tier,
    game_number: u32,
) -> String {
    let mut link = format!(
        "{}?seed={}&length={length}",
        base_of(base_url),
        utf8_percent_encode(seed, QUERY_VALUE)
    );
    if tier != Tier::DEFAULT {
        link.push_str(&format!("&difficulty={tier}"));
    }
    link.push_str(&format!("&game={game_number}"));
    link
}

/// Human description of a seed
///
/// Seeds that spell a date as `YYYYMMDD` read as that date, since daily
/// puzzles use the date as their seed; anything else is shown verbatim.
///
/// # Examples
/// ```
/// use phonics_wordle::challenge::describe_seed;
///
/// assert_eq!(describe_seed("20220110"), "Monday, January 10, 2022");
/// assert_eq!(describe_seed("banana"), "seed banana");
/// ```
#[must_use]
pub fn describe_seed(seed: &str) -> String {
    let seed = seed.trim();
    if seed.len() == 8
        && seed.bytes().all(|b| b.is_ascii_digit())
        && let Ok(date) = NaiveDate::parse_from_str(seed, "%Y%m%d")
    {
        return date.format("%A, %B %-d, %Y").to_string();
    }
    format!("seed {seed}")
}

/// Seed for today's daily puzzle, `YYYYMMDD` in local time
#[must_use]
pub fn daily_seed() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}
