//! Grid cell coordinates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::GRID_SIZE;

/// A cell position on the 5×5 grid.
///
/// Rows are numbered top to bottom and columns left to right, both starting
/// at 0.
///
/// # Examples
///
/// ```
/// use rulegrid_core::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.index(), 8);
/// assert_eq!(pos.manhattan_distance(Position::new(1, 4)), 1);
/// assert_eq!(Position::ALL.len(), 25);
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Row index (0-4).
    pub row: u8,
    /// Column index (0-4).
    pub col: u8,
}

impl Position {
    /// All positions in row-major order.
    ///
    /// Row-major order is also the order in which the solver fills cells.
    pub const ALL: [Self; GRID_SIZE * GRID_SIZE] = {
        let mut all = [Self { row: 0, col: 0 }; GRID_SIZE * GRID_SIZE];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < GRID_SIZE * GRID_SIZE {
            all[i] = Self {
                row: (i / GRID_SIZE) as u8,
                col: (i % GRID_SIZE) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-4.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE);
        Self { row, col }
    }

    /// Returns the row-major index of this position (0-24).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Returns an iterator over the positions of row `row`, left to right.
    pub fn row_positions(row: u8) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |pos| pos.row == row)
    }

    /// Returns an iterator over the positions of column `col`, top to bottom.
    pub fn col_positions(col: u8) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |pos| pos.col == col)
    }

    /// Returns the Manhattan distance between two positions.
    ///
    /// Orthogonal neighbours are exactly distance 1 apart.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[5], Position::new(1, 0));
        assert_eq!(Position::ALL[24], Position::new(4, 4));
    }

    #[test]
    fn test_row_and_col_positions() {
        let row: Vec<_> = Position::row_positions(2).collect();
        assert_eq!(row.len(), 5);
        assert!(row.iter().all(|pos| pos.row == 2));

        let col: Vec<_> = Position::col_positions(4).collect();
        assert_eq!(col.first(), Some(&Position::new(0, 4)));
        assert_eq!(col.last(), Some(&Position::new(4, 4)));
    }

    #[test]
    fn test_manhattan_distance() {
        let center = Position::new(2, 2);
        assert_eq!(center.manhattan_distance(center), 0);
        assert_eq!(center.manhattan_distance(Position::new(1, 2)), 1);
        assert_eq!(center.manhattan_distance(Position::new(3, 3)), 2);
        assert_eq!(Position::new(0, 0).manhattan_distance(Position::new(4, 4)), 8);
    }

    #[test]
    #[should_panic]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(5, 0);
    }
}
