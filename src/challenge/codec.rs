//! Reversible, URL-safe encoding of a challenge word
//!
//! Tokens are unpadded URL-safe base64 (`A-Z a-z 0-9 - _`), so they can be
//! dropped into a query string without percent-escaping. Decoding also
//! accepts padded tokens and the standard `+` `/` alphabet, which older
//! links used.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use std::fmt;

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A challenge token that could not be turned back into text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token is empty
    Empty,
    /// The token is not valid base64
    Malformed(String),
    /// The decoded bytes are not UTF-8 text
    NotText,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Challenge token is empty"),
            Self::Malformed(reason) => write!(f, "Challenge token is malformed: {reason}"),
            Self::NotText => write!(f, "Challenge token does not decode to text"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encode `word` as a URL-safe token
///
/// # Examples
/// ```
/// use phonics_wordle::challenge::{decode, encode};
///
/// let token = encode("plane");
/// assert_eq!(token, "cGxhbmU");
/// assert_eq!(decode(&token).unwrap(), "plane");
/// ```
#[must_use]
pub fn encode(word: &str) -> String {
    TOKEN_ENGINE.encode(word.as_bytes())
}

/// Decode a token produced by [`encode`]
///
/// # Errors
/// Returns `DecodeError` if the token is empty, is not base64, or does not
/// decode to UTF-8 text.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let normalized: String = token
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = TOKEN_ENGINE
        .decode(normalized.as_bytes())
        .map_err(|e| DecodeError::Malformed(e.to_string()))?;

    String::from_utf8(bytes).map_err(|_| DecodeError::NotText)
}
