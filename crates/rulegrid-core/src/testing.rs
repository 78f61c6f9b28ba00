//! Shared fixtures for unit tests.

use proptest::prelude::*;

use crate::{GRID_SIZE, Grid, Position, SymbolId};

/// The cyclic Latin square `cell(row, col) = ALL[(row + col) % 5]`:
///
/// ```text
/// ABCDE
/// BCDEA
/// CDEAB
/// DEABC
/// EABCD
/// ```
pub(crate) fn cyclic_grid() -> Grid {
    let mut grid = Grid::new();
    for pos in Position::ALL {
        let i = (usize::from(pos.row) + usize::from(pos.col)) % GRID_SIZE;
        grid[pos] = Some(SymbolId::ALL[i]);
    }
    grid
}

/// Arbitrary grids, including partial and non-Latin ones.
pub(crate) fn grid_strategy() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::option::of(0..GRID_SIZE), GRID_SIZE * GRID_SIZE).prop_map(
        |cells| {
            let mut grid = Grid::new();
            for (pos, cell) in Position::ALL.into_iter().zip(cells) {
                grid[pos] = cell.map(SymbolId::from_index);
            }
            grid
        },
    )
}
