//! Game rules applied on top of the clue engine
//!
//! Hard-mode validation of new guesses and the per-letter keyboard state.

mod letter_state;
mod validator;

pub use letter_state::LetterStates;
pub use validator::{Difficulty, first_violation, violation};
