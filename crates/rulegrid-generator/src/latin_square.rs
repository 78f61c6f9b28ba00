use rulegrid_core::{GRID_SIZE, Grid, Position, SymbolId};

use crate::SeededRng;

/// Number of random row swaps, followed by the same number of column swaps.
const SWAP_ROUNDS: usize = 10;

/// Generates a pseudo-random 5×5 Latin square from `seed`.
///
/// The symbols are shuffled and laid out as a cyclic square
/// (`cell(row, col) = shuffled[(row + col) % 5]`), then ten random row swaps
/// and ten random column swaps are applied. Row and column permutations keep
/// the Latin property, so this never fails.
///
/// # Examples
///
/// ```
/// use rulegrid_generator::{generate_latin_square, is_valid_latin_square};
///
/// let grid = generate_latin_square("seed");
/// assert!(is_valid_latin_square(&grid));
/// assert_eq!(grid, generate_latin_square("seed"));
/// ```
#[must_use]
pub fn generate_latin_square(seed: &str) -> Grid {
    let mut rng = SeededRng::new(seed);

    let mut symbols = SymbolId::ALL;
    rng.shuffle(&mut symbols);

    let mut grid = Grid::new();
    for pos in Position::ALL {
        let shift = (usize::from(pos.row) + usize::from(pos.col)) % GRID_SIZE;
        grid[pos] = Some(symbols[shift]);
    }

    for _ in 0..SWAP_ROUNDS {
        let (a, b) = draw_pair(&mut rng);
        grid.swap_rows(a, b);
    }
    for _ in 0..SWAP_ROUNDS {
        let (a, b) = draw_pair(&mut rng);
        grid.swap_columns(a, b);
    }
    grid
}

#[expect(clippy::cast_possible_truncation)]
fn draw_pair(rng: &mut SeededRng) -> (u8, u8) {
    let a = rng.next_index(GRID_SIZE) as u8;
    let b = rng.next_index(GRID_SIZE) as u8;
    (a, b)
}

/// Returns `true` if every row and column of `grid` holds all five symbols.
///
/// Used as a defensive check on [`generate_latin_square`]'s output.
#[must_use]
pub fn is_valid_latin_square(grid: &Grid) -> bool {
    grid.is_latin_square()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_squares() {
        assert_eq!(
            generate_latin_square("test").to_string(),
            "BAEDC|DBCEA|ACDBE|EDACB|CEBAD"
        );
        assert_eq!(
            generate_latin_square("seed-a").to_string(),
            "ACEDB|DBCEA|CDABE|EABCD|BEDAC"
        );
    }

    #[test]
    fn test_empty_seed() {
        let grid = generate_latin_square("");
        assert!(is_valid_latin_square(&grid));
    }

    #[test]
    fn test_invalid_square_is_rejected() {
        let mut grid = generate_latin_square("test");
        grid[Position::new(0, 0)] = None;
        assert!(!is_valid_latin_square(&grid));
    }

    proptest! {
        #[test]
        fn prop_always_latin(seed in any::<String>()) {
            let grid = generate_latin_square(&seed);
            prop_assert!(is_valid_latin_square(&grid));
            prop_assert_eq!(grid, generate_latin_square(&seed));
        }
    }
}
