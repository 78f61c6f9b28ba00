//! Core data structures for the RuleGrid puzzle engine.
//!
//! RuleGrid puzzles are 5×5 Latin squares over five symbols. Instead of
//! given cells, a puzzle shows a short list of logical clues ("rule cards")
//! that together pin down the solution.
//!
//! # Overview
//!
//! - [`symbol`]: the five symbol identifiers and their default glyphs
//! - [`position`]: cell coordinates
//! - [`grid`]: the 5×5 grid, its Latin-square checks and wire form
//! - [`canonical`]: the canonical text form used for fingerprints
//! - [`rule_card`]: the six clue kinds and the validator shared by generation,
//!   solving and verification
//! - [`rule_card_kind`]: clue kinds and sets of enabled kinds
//! - [`fingerprint`]: the non-cryptographic solution hash
//!
//! # Examples
//!
//! ```
//! use rulegrid_core::{Grid, RuleCard, SymbolId::*, grid_to_canonical};
//!
//! let grid: Grid = "ABCDE|BCDEA|CDEAB|DEABC|EABCD".parse()?;
//! assert!(grid.is_latin_square());
//! assert!(RuleCard::Adjacent { a: A, b: B }.is_satisfied_by(&grid));
//! assert_eq!(grid_to_canonical(&grid), "ABCDE|BCDEA|CDEAB|DEABC|EABCD");
//! # Ok::<(), rulegrid_core::GridParseError>(())
//! ```

/// Number of rows, columns and symbols.
pub const GRID_SIZE: usize = 5;

pub mod canonical;
mod error;
pub mod fingerprint;
pub mod grid;
pub mod position;
pub mod rule_card;
pub mod rule_card_kind;
pub mod symbol;

#[cfg(test)]
mod testing;

pub use self::{
    canonical::{canonical_to_grid, grid_to_canonical},
    error::*,
    fingerprint::{SolutionHash, hash_solution, verify_solution_hash},
    grid::Grid,
    position::Position,
    rule_card::{AffectedCells, RuleCard, get_affected_cells, validate_rule_card},
    rule_card_kind::{RuleCardKind, RuleCardKinds},
    symbol::{DEFAULT_SYMBOLS, Symbol, SymbolId},
};
