use rulegrid_core::{Grid, grid_to_canonical, verify_solution_hash};
use rulegrid_generator::Puzzle;
use rulegrid_solver::verify_solution;
use serde::{Deserialize, Serialize};

/// The outcome of checking a submitted grid.
///
/// A rejected submission is a normal result, not an error. The two rejection
/// kinds are kept apart so a caller can tell a wrong answer from a grid that
/// satisfies the clues but is not the one that was generated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionVerdict {
    /// The grid is a Latin square, meets every clue, and matches the fingerprint.
    Accepted,
    /// The grid is incomplete, breaks the Latin-square rule, or misses a clue.
    InvalidSolution,
    /// The grid meets every clue but its fingerprint differs from the puzzle's.
    #[serde(rename = "SOLUTION_HASH_MISMATCH")]
    HashMismatch,
}

/// Checks a submitted grid against a puzzle.
///
/// The structural and clue check runs first; the fingerprint is only compared
/// for grids that pass it.
///
/// # Examples
///
/// ```
/// use rulegrid_core::fingerprint::DEFAULT_SOLUTION_SALT;
/// use rulegrid_game::{SubmissionVerdict, check_submission};
/// use rulegrid_generator::PuzzleGenerator;
///
/// let generated = PuzzleGenerator::default().generate(Default::default())?;
/// let verdict = check_submission(
///     &generated.solution,
///     &generated.puzzle,
///     DEFAULT_SOLUTION_SALT,
/// );
/// assert_eq!(verdict, SubmissionVerdict::Accepted);
/// # Ok::<(), rulegrid_generator::GenerateError>(())
/// ```
#[must_use]
pub fn check_submission(grid: &Grid, puzzle: &Puzzle, salt: &str) -> SubmissionVerdict {
    if !verify_solution(grid, &puzzle.rule_cards) {
        log::debug!("rejected submission for seed {}: invalid solution", puzzle.seed);
        return SubmissionVerdict::InvalidSolution;
    }
    let canonical = grid_to_canonical(grid);
    if !verify_solution_hash(&canonical, puzzle.seed.as_str(), &puzzle.solution_hash, salt) {
        log::debug!("rejected submission for seed {}: fingerprint mismatch", puzzle.seed);
        return SubmissionVerdict::HashMismatch;
    }
    SubmissionVerdict::Accepted
}
