use std::ops::ControlFlow;

use rulegrid_core::{Grid, Position, RuleCard, SymbolId};

/// Exhaustive backtracking search over 5×5 Latin squares.
///
/// Cells are filled in row-major order, trying symbols in identifier order and
/// pruning any placement that repeats a symbol in its row or column. Rule
/// cards are only checked once the grid is full, so every enumerated grid is a
/// Latin square and every reported solution satisfies all cards.
///
/// # Examples
///
/// ```
/// use rulegrid_core::{RuleCard, SymbolId::*};
/// use rulegrid_solver::BacktrackSolver;
///
/// let cards = [RuleCard::SameMainDiagonal { a: C }];
/// let solver = BacktrackSolver::new(&cards);
/// assert_eq!(solver.count_solutions(3), 3);
/// assert!(!solver.has_unique_solution());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BacktrackSolver<'a> {
    cards: &'a [RuleCard],
}

impl<'a> BacktrackSolver<'a> {
    /// Creates a solver for the given rule cards.
    #[must_use]
    pub fn new(cards: &'a [RuleCard]) -> Self {
        Self { cards }
    }

    /// Returns the rule cards this solver checks.
    #[must_use]
    pub fn cards(&self) -> &'a [RuleCard] {
        self.cards
    }

    /// Counts solutions, stopping as soon as `max_count` have been found.
    ///
    /// The result is `min(actual, max_count)`. A `max_count` of zero returns
    /// zero without searching.
    #[must_use]
    pub fn count_solutions(&self, max_count: usize) -> usize {
        if max_count == 0 {
            return 0;
        }
        let mut count = 0;
        let _ = self.search(&mut Grid::new(), 0, &mut |_| {
            count += 1;
            if count >= max_count {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        log::trace!(
            "counted {count} solutions for {} cards (limit {max_count})",
            self.cards.len()
        );
        count
    }

    /// Returns `true` if exactly one Latin square satisfies every card.
    #[must_use]
    pub fn has_unique_solution(&self) -> bool {
        self.count_solutions(2) == 1
    }

    /// Returns the first solution in search order, if any.
    #[must_use]
    pub fn solve(&self) -> Option<Grid> {
        match self.search(&mut Grid::new(), 0, &mut |grid| ControlFlow::Break(*grid)) {
            ControlFlow::Break(grid) => Some(grid),
            ControlFlow::Continue(()) => None,
        }
    }

    fn search<B>(
        &self,
        grid: &mut Grid,
        index: usize,
        on_solution: &mut impl FnMut(&Grid) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        let Some(&pos) = Position::ALL.get(index) else {
            if self.cards.iter().all(|card| card.is_satisfied_by(grid)) {
                return on_solution(grid);
            }
            return ControlFlow::Continue(());
        };

        for symbol in SymbolId::ALL {
            if !grid.can_place(pos, symbol) {
                continue;
            }
            grid[pos] = Some(symbol);
            let flow = self.search(grid, index + 1, on_solution);
            grid[pos] = None;
            flow?;
        }
        ControlFlow::Continue(())
    }
}

/// Counts the solutions of `cards`, up to `max_count`.
///
/// See [`BacktrackSolver::count_solutions`].
#[must_use]
pub fn count_solutions(cards: &[RuleCard], max_count: usize) -> usize {
    BacktrackSolver::new(cards).count_solutions(max_count)
}

/// Returns `true` if `cards` admit exactly one solution.
#[must_use]
pub fn has_unique_solution(cards: &[RuleCard]) -> bool {
    BacktrackSolver::new(cards).has_unique_solution()
}

/// Returns the first solution of `cards` in search order, if any.
#[must_use]
pub fn solve_puzzle(cards: &[RuleCard]) -> Option<Grid> {
    BacktrackSolver::new(cards).solve()
}
