//! Challenge tokens and share links
//!
//! A challenge embeds a chosen target word in a link so someone else can
//! play the same word. Seed links replay a numbered game of a seed instead.

mod codec;
mod link;

pub use codec::{DecodeError, decode, encode};
pub use link::{
    LinkParams, MAX_GAME_NUMBER, base_of, challenge_link, daily_seed, describe_seed, seed_link,
};
