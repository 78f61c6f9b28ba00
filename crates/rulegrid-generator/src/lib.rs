//! Puzzle generation for RuleGrid.
//!
//! A puzzle is generated from a string seed in a fixed pipeline: a seeded
//! Latin square becomes the solution, every clue it satisfies is listed, and a
//! difficulty-sized subset of those clues is shown to the player. Everything
//! is deterministic in the seed, so a daily puzzle can be regenerated at any
//! time from its date-derived seed.
//!
//! # Examples
//!
//! ```
//! use rulegrid_core::RuleCardKinds;
//! use rulegrid_generator::{Difficulty, generate_puzzle};
//!
//! let generated = generate_puzzle(
//!     "daily-2026-10-18",
//!     Difficulty::default(),
//!     RuleCardKinds::DEFAULT,
//! )?;
//! assert!(generated.solution.is_latin_square());
//! assert!(generated.puzzle.rule_cards.len() >= 5);
//! # Ok::<(), rulegrid_generator::GenerateError>(())
//! ```
//!
//! The clue selector is only calibrated by card count. The generator does not
//! retry a selection that leaves the puzzle ambiguous; it appends one extra
//! card and reports [`Uniqueness::Weak`].

pub use self::{
    candidates::*, config::*, difficulty::*, error::*, generator::*, latin_square::*, puzzle::*,
    rng::*, seed::*, selection::*,
};

mod candidates;
mod config;
mod difficulty;
mod error;
mod generator;
mod latin_square;
mod puzzle;
mod rng;
mod seed;
mod selection;
