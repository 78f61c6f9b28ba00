use rulegrid_core::{Grid, RuleCard};

/// Returns `true` if `grid` is a complete Latin square satisfying every card.
///
/// # Examples
///
/// ```
/// use rulegrid_core::{Grid, RuleCard, SymbolId::*};
/// use rulegrid_solver::verify_solution;
///
/// let grid: Grid = "ABCDE|BCDEA|CDEAB|DEABC|EABCD".parse()?;
/// assert!(verify_solution(&grid, &[RuleCard::Adjacent { a: A, b: B }]));
/// assert!(!verify_solution(&grid, &[RuleCard::NotInRow { a: A, row: 0 }]));
/// # Ok::<(), rulegrid_core::GridParseError>(())
/// ```
#[must_use]
pub fn verify_solution(grid: &Grid, cards: &[RuleCard]) -> bool {
    grid.is_latin_square() && cards.iter().all(|card| card.is_satisfied_by(grid))
}
