//! Command implementations

pub mod audit;
pub mod link;
pub mod play;

pub use audit::{AuditReport, AuditRow, run_audit};
pub use link::{ChallengeReport, create_challenge, inspect_challenge};
pub use play::{PlayOptions, run_play};
