//! Canonical text form of a grid.
//!
//! A complete grid renders as its five rows of identifiers joined with no
//! separator, rows separated by `|`:
//!
//! ```text
//! ABCDE|BCDEA|CDEAB|DEABC|EABCD
//! ```
//!
//! This exact byte sequence feeds the solution fingerprint, so it must never
//! change. Empty cells of a partial grid render as `.`.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{GRID_SIZE, Grid, GridParseError, Position, SymbolId};

/// Separator placed between rows in the canonical form.
pub const ROW_SEPARATOR: char = '|';

/// Marker for an empty cell in the canonical form.
pub const EMPTY_CELL: char = '.';

/// Converts a grid to its canonical string form.
///
/// # Examples
///
/// ```
/// use rulegrid_core::{Grid, SymbolId::*, grid_to_canonical};
///
/// let grid = Grid::from_rows([
///     [A, B, C, D, E],
///     [B, C, D, E, A],
///     [C, D, E, A, B],
///     [D, E, A, B, C],
///     [E, A, B, C, D],
/// ]);
/// assert_eq!(grid_to_canonical(&grid), "ABCDE|BCDEA|CDEAB|DEABC|EABCD");
/// ```
#[must_use]
pub fn grid_to_canonical(grid: &Grid) -> String {
    let mut out = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
    for (i, row) in grid.rows().iter().enumerate() {
        if i > 0 {
            out.push(ROW_SEPARATOR);
        }
        out.extend(row.iter().map(|cell| cell.map_or(EMPTY_CELL, SymbolId::as_char)));
    }
    out
}

/// Parses a grid from its canonical string form.
///
/// # Errors
///
/// Returns a [`GridParseError`] if the text does not hold exactly five rows of
/// five cells, or if a cell is neither a symbol identifier nor `.`.
pub fn canonical_to_grid(canonical: &str) -> Result<Grid, GridParseError> {
    let rows: Vec<&str> = canonical.split(ROW_SEPARATOR).collect();
    if rows.len() != GRID_SIZE {
        return Err(GridParseError::InvalidRowCount { count: rows.len() });
    }

    let mut grid = Grid::new();
    for (row, text) in (0..).zip(&rows) {
        let len = text.chars().count();
        if len != GRID_SIZE {
            return Err(GridParseError::InvalidRowLength {
                row: usize::from(row),
                len,
            });
        }
        for (col, c) in (0..).zip(text.chars()) {
            if c == EMPTY_CELL {
                continue;
            }
            let symbol = SymbolId::from_char(c).ok_or_else(|| GridParseError::InvalidSymbol {
                row: usize::from(row),
                col: usize::from(col),
                symbol: c.to_string(),
            })?;
            grid[Position::new(row, col)] = Some(symbol);
        }
    }
    Ok(grid)
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&grid_to_canonical(self))
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical_to_grid(s)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{cyclic_grid, grid_strategy};

    #[test]
    fn test_canonical_form_is_bit_exact() {
        assert_eq!(
            grid_to_canonical(&cyclic_grid()),
            "ABCDE|BCDEA|CDEAB|DEABC|EABCD"
        );
        assert_eq!(
            grid_to_canonical(&Grid::new()),
            ".....|.....|.....|.....|....."
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            canonical_to_grid("ABCDE|BCDEA"),
            Err(GridParseError::InvalidRowCount { count: 2 })
        );
        assert_eq!(
            canonical_to_grid("ABCDE|BCDEA|CDEAB|DEAB|EABCD"),
            Err(GridParseError::InvalidRowLength { row: 3, len: 4 })
        );
        assert_eq!(
            canonical_to_grid("ABCDE|BCDEA|CDxAB|DEABC|EABCD"),
            Err(GridParseError::InvalidSymbol {
                row: 2,
                col: 2,
                symbol: "x".to_owned()
            })
        );
    }

    #[test]
    fn test_display_and_from_str_agree() {
        let grid: Grid = "A.C..|.....|..E..|.....|....D".parse().unwrap();
        assert_eq!(grid[Position::new(0, 0)], Some(SymbolId::A));
        assert_eq!(grid[Position::new(0, 1)], None);
        assert_eq!(grid[Position::new(4, 4)], Some(SymbolId::D));
        assert_eq!(grid.to_string(), "A.C..|.....|..E..|.....|....D");
    }

    proptest! {
        #[test]
        fn prop_canonical_parses_back(grid in grid_strategy()) {
            let canonical = grid_to_canonical(&grid);
            prop_assert_eq!(canonical.len(), 29);
            prop_assert_eq!(canonical_to_grid(&canonical), Ok(grid));
        }
    }
}
