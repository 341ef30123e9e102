//! Terminal output formatting
//!
//! Rendering of the board and keyboard, and pretty-printing of command
//! reports.

pub mod display;
pub mod formatters;

pub use display::{print_audit_report, print_challenge_report, render_session};
