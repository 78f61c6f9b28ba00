//! Brute-force solving for RuleGrid puzzles.
//!
//! The solver enumerates every Latin square consistent with a set of rule
//! cards. It is used to check that a puzzle has a unique solution and to
//! recover that solution.
//!
//! The search is exhaustive and uncancellable. On a 5×5 grid it finishes
//! quickly, but it is not meant for larger boards.
//!
//! # Examples
//!
//! ```
//! use rulegrid_core::{RuleCard, SymbolId::*};
//! use rulegrid_solver::{count_solutions, solve_puzzle};
//!
//! // Without clues, there are many Latin squares.
//! assert_eq!(count_solutions(&[], 2), 2);
//!
//! let cards = [RuleCard::Adjacent { a: A, b: E }];
//! let solution = solve_puzzle(&cards).expect("a solution exists");
//! assert!(solution.is_latin_square());
//! assert!(cards[0].is_satisfied_by(&solution));
//! ```

pub use self::{backtrack::*, verify::*};

mod backtrack;
mod verify;
