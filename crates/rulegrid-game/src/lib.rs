//! Play sessions and submission checks for RuleGrid puzzles.
//!
//! A [`Game`] holds the player's partially filled grid next to the puzzle's
//! clues and answers the questions a board UI asks: which cells clash, which
//! clues are not yet met, which cells a clue talks about. Submitting a
//! finished grid yields a [`SubmissionVerdict`].

pub use self::{error::*, game::*, submission::*};

mod error;
mod game;
mod submission;
