use rulegrid_core::{AffectedCells, Grid, Position, RuleCard, SymbolId};
use rulegrid_generator::Puzzle;

use crate::{GameError, SubmissionVerdict, check_submission};

/// A RuleGrid play session.
///
/// Holds the puzzle and the player's grid. RuleGrid puzzles have no given
/// cells, so every cell starts empty and any cell may be set or cleared.
///
/// # Example
///
/// ```
/// use rulegrid_core::{Position, SymbolId, fingerprint::DEFAULT_SOLUTION_SALT};
/// use rulegrid_game::{Game, SubmissionVerdict};
/// use rulegrid_generator::PuzzleGenerator;
///
/// let generated = PuzzleGenerator::default().generate(Default::default())?;
/// let mut game = Game::new(generated.puzzle);
/// assert!(game.grid().is_empty());
///
/// game.set_symbol(Position::new(0, 0), SymbolId::A);
/// assert_eq!(game.cell(Position::new(0, 0)), Some(SymbolId::A));
/// assert_eq!(game.submit(DEFAULT_SOLUTION_SALT), SubmissionVerdict::InvalidSolution);
///
/// for pos in Position::ALL {
///     game.set_cell(pos, generated.solution[pos]);
/// }
/// assert_eq!(game.submit(DEFAULT_SOLUTION_SALT), SubmissionVerdict::Accepted);
/// # Ok::<(), rulegrid_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    grid: Grid,
}

impl Game {
    /// Starts a session on `puzzle` with an empty grid.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_grid(puzzle, Grid::new())
    }

    /// Resumes a session on `puzzle` with a previously saved grid.
    #[must_use]
    pub fn with_grid(puzzle: Puzzle, grid: Grid) -> Self {
        Self { puzzle, grid }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the player's grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the symbol at `pos`, if any.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<SymbolId> {
        self.grid[pos]
    }

    /// Places `symbol` at `pos`, replacing whatever was there.
    ///
    /// Placements that clash with the row or column are allowed; see
    /// [`Game::conflicts`].
    pub fn set_symbol(&mut self, pos: Position, symbol: SymbolId) {
        self.grid[pos] = Some(symbol);
    }

    /// Sets or clears the cell at `pos`.
    pub fn set_cell(&mut self, pos: Position, symbol: Option<SymbolId>) {
        self.grid[pos] = symbol;
    }

    /// Clears the cell at `pos`.
    pub fn clear_cell(&mut self, pos: Position) {
        self.grid[pos] = None;
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Returns the filled cells whose symbol repeats in their row or column.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Position> {
        self.grid.conflicts()
    }

    /// Returns each rule card with its index, in display order, that the
    /// current grid does not satisfy.
    ///
    /// On a partial grid, clues that need a symbol to be placed (such as
    /// [`RuleCard::Adjacent`]) count as unsatisfied until it is.
    pub fn unsatisfied_rule_cards(&self) -> impl Iterator<Item = (usize, &RuleCard)> + '_ {
        self.puzzle
            .rule_cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_satisfied_by(&self.grid))
    }

    /// Returns the cells to highlight as a hint for the rule card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RuleCardOutOfRange`] if the puzzle has no card at
    /// `index`.
    pub fn hint_cells(&self, index: usize) -> Result<AffectedCells, GameError> {
        let cards = &self.puzzle.rule_cards;
        let card = cards.get(index).ok_or(GameError::RuleCardOutOfRange {
            index,
            len: cards.len(),
        })?;
        Ok(card.affected_cells())
    }

    /// Judges the current grid as a submission, fingerprinting with `salt`.
    #[must_use]
    pub fn submit(&self, salt: &str) -> SubmissionVerdict {
        check_submission(&self.grid, &self.puzzle, salt)
    }
}

#[cfg(test)]
mod tests {
    use rulegrid_core::{
        DEFAULT_SYMBOLS, SolutionHash, SymbolId::*, fingerprint::DEFAULT_SOLUTION_SALT,
    };
    use rulegrid_generator::{Difficulty, PuzzleGenerator, PuzzleKind, PuzzleSeed};

    use super::*;

    fn fixed_puzzle(rule_cards: Vec<RuleCard>) -> Puzzle {
        Puzzle {
            kind: PuzzleKind::Practice,
            seed: PuzzleSeed::from("fixed"),
            difficulty: Difficulty::MIN,
            symbols: DEFAULT_SYMBOLS.to_vec(),
            rule_cards,
            solution_hash: SolutionHash::new("0"),
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut game = Game::new(fixed_puzzle(vec![]));
        let pos = Position::new(2, 3);
        game.set_symbol(pos, C);
        assert_eq!(game.cell(pos), Some(C));
        game.set_cell(pos, Some(D));
        assert_eq!(game.grid()[pos], Some(D));
        game.clear_cell(pos);
        assert_eq!(game.cell(pos), None);

        game.set_symbol(pos, E);
        game.reset();
        assert!(game.grid().is_empty());
    }

    #[test]
    fn test_conflicts() {
        let mut game = Game::new(fixed_puzzle(vec![]));
        game.set_symbol(Position::new(0, 0), A);
        game.set_symbol(Position::new(0, 4), A);
        game.set_symbol(Position::new(3, 0), B);
        assert_eq!(
            game.conflicts(),
            [Position::new(0, 0), Position::new(0, 4)]
        );
        game.clear_cell(Position::new(0, 4));
        assert!(game.conflicts().is_empty());
    }

    #[test]
    fn test_unsatisfied_rule_cards() {
        let cards = vec![
            RuleCard::Adjacent { a: A, b: B },
            RuleCard::NotInCol { a: C, col: 1 },
            RuleCard::LeftOf { a: B, b: A },
        ];
        let mut game = Game::new(fixed_puzzle(cards.clone()));
        let unsatisfied: Vec<_> = game.unsatisfied_rule_cards().map(|(i, _)| i).collect();
        assert_eq!(unsatisfied, [0, 2]);

        game.set_symbol(Position::new(1, 1), A);
        game.set_symbol(Position::new(1, 2), B);
        let unsatisfied: Vec<_> = game.unsatisfied_rule_cards().collect();
        assert_eq!(unsatisfied, [(2, &cards[2])]);

        game.set_symbol(Position::new(4, 1), C);
        assert_eq!(game.unsatisfied_rule_cards().count(), 2);
    }

    #[test]
    fn test_hint_cells() {
        let game = Game::new(fixed_puzzle(vec![
            RuleCard::NotInRow { a: A, row: 3 },
            RuleCard::SameMainDiagonal { a: B },
        ]));
        let row: Vec<_> = game.hint_cells(0).unwrap().into_iter().collect();
        assert_eq!(row, Position::row_positions(3).collect::<Vec<_>>());
        assert_eq!(game.hint_cells(1).unwrap().len(), 25);
        assert_eq!(
            game.hint_cells(2),
            Err(GameError::RuleCardOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_submit_generated_solution() {
        let generated = PuzzleGenerator::default()
            .generate_with_seed(&PuzzleSeed::from("play"), Difficulty::MAX)
            .unwrap();
        let game = Game::new(generated.puzzle.clone());
        assert!(!game.is_complete());
        assert!(game.submit(DEFAULT_SOLUTION_SALT).is_invalid_solution());

        let game = Game::with_grid(generated.puzzle, generated.solution);
        assert!(game.is_complete());
        assert!(game.conflicts().is_empty());
        assert_eq!(game.unsatisfied_rule_cards().count(), 0);
        assert!(game.submit(DEFAULT_SOLUTION_SALT).is_accepted());
    }
}
