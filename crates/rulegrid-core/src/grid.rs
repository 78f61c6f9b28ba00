//! The 5×5 symbol grid.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{GRID_SIZE, GridParseError, Position, SymbolId};

/// A 5×5 grid of symbol identifiers.
///
/// Cells are `None` while empty. A grid is *solved* when every cell is filled
/// and every row and column holds each of the five symbols exactly once (see
/// [`Grid::is_latin_square`]).
///
/// On the wire a grid is an array of five rows, each an array of five
/// identifier strings with `""` for an empty cell. [`Display`] and
/// [`FromStr`] use the canonical text form instead (see
/// [`grid_to_canonical`](crate::grid_to_canonical)).
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
///
/// # Examples
///
/// ```
/// use rulegrid_core::{Grid, Position, SymbolId};
///
/// let mut grid = Grid::new();
/// grid[Position::new(0, 0)] = Some(SymbolId::A);
/// assert!(!grid.can_place(Position::new(0, 3), SymbolId::A));
/// assert!(grid.can_place(Position::new(1, 1), SymbolId::A));
/// assert!(!grid.is_complete());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Grid {
    cells: [[Option<SymbolId>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a fully filled grid from rows of identifiers.
    #[must_use]
    pub fn from_rows(rows: [[SymbolId; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Some)),
        }
    }

    /// Returns the symbol at `pos`, or `None` if the cell is empty.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<SymbolId> {
        self[pos]
    }

    /// Sets or clears the cell at `pos`.
    #[inline]
    pub fn set(&mut self, pos: Position, symbol: Option<SymbolId>) {
        self[pos] = symbol;
    }

    /// Returns the cells of row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: u8) -> [Option<SymbolId>; GRID_SIZE] {
        self.cells[usize::from(row)]
    }

    /// Returns the cells of column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: u8) -> [Option<SymbolId>; GRID_SIZE] {
        self.cells.map(|row| row[usize::from(col)])
    }

    /// Returns all rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Option<SymbolId>; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Returns every position holding `symbol`, in row-major order.
    pub fn positions_of(&self, symbol: SymbolId) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self[pos] == Some(symbol))
    }

    /// Returns how many times `symbol` occurs in row `row`.
    #[must_use]
    pub fn count_in_row(&self, symbol: SymbolId, row: u8) -> usize {
        self.row(row)
            .iter()
            .filter(|&&cell| cell == Some(symbol))
            .count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns `true` if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Returns `true` if `symbol` does not already occur in the row or column
    /// of `pos`, ignoring the cell at `pos` itself.
    ///
    /// This is the partial Latin-square check used while placing symbols.
    #[must_use]
    pub fn can_place(&self, pos: Position, symbol: SymbolId) -> bool {
        let in_row = Position::row_positions(pos.row)
            .any(|other| other != pos && self[other] == Some(symbol));
        let in_col = Position::col_positions(pos.col)
            .any(|other| other != pos && self[other] == Some(symbol));
        !in_row && !in_col
    }

    /// Returns `true` if the grid is a complete Latin square.
    ///
    /// Every row and every column must contain each of the five symbols exactly
    /// once. Grids with empty cells are never Latin squares.
    #[must_use]
    pub fn is_latin_square(&self) -> bool {
        self.cells.iter().all(covers_alphabet)
            && (0..GRID_SIZE).all(|col| covers_alphabet(&self.cells.map(|row| row[col])))
    }

    /// Returns every filled cell whose symbol also occurs elsewhere in its row
    /// or column, in row-major order.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self[pos].is_some_and(|symbol| !self.can_place(pos, symbol)))
            .collect()
    }

    /// Swaps two whole rows.
    pub fn swap_rows(&mut self, a: u8, b: u8) {
        self.cells.swap(usize::from(a), usize::from(b));
    }

    /// Swaps two whole columns.
    pub fn swap_columns(&mut self, a: u8, b: u8) {
        for row in &mut self.cells {
            row.swap(usize::from(a), usize::from(b));
        }
    }
}

fn covers_alphabet(house: &[Option<SymbolId>; GRID_SIZE]) -> bool {
    let mut seen = [false; GRID_SIZE];
    for cell in house {
        let Some(symbol) = cell else {
            return false;
        };
        if seen[symbol.index()] {
            return false;
        }
        seen[symbol.index()] = true;
    }
    seen.iter().all(|&s| s)
}

impl Index<Position> for Grid {
    type Output = Option<SymbolId>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.row)][usize::from(pos.col)]
    }
}

impl IndexMut<Position> for Grid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[usize::from(pos.row)][usize::from(pos.col)]
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|symbol| symbol.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = GridParseError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE {
            return Err(GridParseError::InvalidRowCount { count: rows.len() });
        }
        let mut grid = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != GRID_SIZE {
                return Err(GridParseError::InvalidRowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let symbol = SymbolId::from_id_str(cell).ok_or_else(|| {
                    GridParseError::InvalidSymbol {
                        row,
                        col,
                        symbol: cell.clone(),
                    }
                })?;
                grid.cells[row][col] = Some(symbol);
            }
        }
        Ok(grid)
    }
}
