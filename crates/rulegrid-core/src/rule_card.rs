//! Rule cards: the logical clues of a puzzle.

use std::fmt::{self, Display};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error as _, Unexpected},
};
use tinyvec::ArrayVec;

use crate::{GRID_SIZE, Grid, Position, RuleCardKind, SymbolId};

/// Cells touched by a rule card, as returned by [`RuleCard::affected_cells`].
pub type AffectedCells = ArrayVec<[Position; GRID_SIZE * GRID_SIZE]>;

/// A single logical constraint over the grid.
///
/// Rule cards are immutable values. A puzzle owns an ordered list of them; the
/// order matters for display only.
///
/// The serialized form is internally tagged and is the form stored alongside
/// the puzzle and shipped to the client:
///
/// ```
/// use rulegrid_core::{RuleCard, SymbolId};
///
/// let card = RuleCard::LeftOf { a: SymbolId::A, b: SymbolId::B };
/// assert_eq!(
///     serde_json::to_string(&card).unwrap(),
///     r#"{"type":"LEFT_OF","a":"A","b":"B"}"#
/// );
/// ```
///
/// Row and column operands are checked when deserializing, so a card read from
/// storage never addresses a cell outside the grid:
///
/// ```
/// use rulegrid_core::RuleCard;
///
/// assert!(serde_json::from_str::<RuleCard>(r#"{"type":"NOT_IN_COL","a":"A","col":9}"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCard {
    /// In some row, an `a` occurs strictly left of a `b`.
    LeftOf {
        /// The left symbol.
        a: SymbolId,
        /// The right symbol.
        b: SymbolId,
    },
    /// `a` does not appear in row `row`.
    NotInRow {
        /// The excluded symbol.
        a: SymbolId,
        /// Row index (0-4).
        #[serde(deserialize_with = "deserialize_index")]
        row: u8,
    },
    /// `a` does not appear in column `col`.
    NotInCol {
        /// The excluded symbol.
        a: SymbolId,
        /// Column index (0-4).
        #[serde(deserialize_with = "deserialize_index")]
        col: u8,
    },
    /// `a` occurs exactly `count` times in row `row`.
    ExactCountRow {
        /// The counted symbol.
        a: SymbolId,
        /// Row index (0-4).
        #[serde(deserialize_with = "deserialize_index")]
        row: u8,
        /// Required number of occurrences.
        count: u8,
    },
    /// Some `a` is orthogonally adjacent to some `b`.
    Adjacent {
        /// The first symbol.
        a: SymbolId,
        /// The second symbol.
        b: SymbolId,
    },
    /// Two occurrences of `a` share a diagonal (either orientation).
    SameMainDiagonal {
        /// The symbol.
        a: SymbolId,
    },
}

impl RuleCard {
    /// Returns the kind of this card.
    #[must_use]
    pub const fn kind(&self) -> RuleCardKind {
        match self {
            Self::LeftOf { .. } => RuleCardKind::LeftOf,
            Self::NotInRow { .. } => RuleCardKind::NotInRow,
            Self::NotInCol { .. } => RuleCardKind::NotInCol,
            Self::ExactCountRow { .. } => RuleCardKind::ExactCountRow,
            Self::Adjacent { .. } => RuleCardKind::Adjacent,
            Self::SameMainDiagonal { .. } => RuleCardKind::SameMainDiagonal,
        }
    }

    /// Returns `true` if `grid` currently satisfies this card.
    ///
    /// Empty cells count as holding no symbol, so the check is meaningful on
    /// partial grids too. This is the one predicate shared by candidate
    /// derivation, the solver and submission verification.
    ///
    /// # Panics
    ///
    /// Panics if a row or column operand is 5 or more. Deserialized cards are
    /// range-checked, so only hand-built cards can trip this.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulegrid_core::{Grid, RuleCard, SymbolId::*};
    ///
    /// let grid = Grid::from_rows([
    ///     [A, B, C, D, E],
    ///     [B, C, D, E, A],
    ///     [C, D, E, A, B],
    ///     [D, E, A, B, C],
    ///     [E, A, B, C, D],
    /// ]);
    /// assert!(RuleCard::LeftOf { a: A, b: B }.is_satisfied_by(&grid));
    /// assert!(RuleCard::ExactCountRow { a: A, row: 0, count: 1 }.is_satisfied_by(&grid));
    /// assert!(!RuleCard::NotInRow { a: B, row: 0 }.is_satisfied_by(&grid));
    /// ```
    #[must_use]
    pub fn is_satisfied_by(&self, grid: &Grid) -> bool {
        match *self {
            Self::LeftOf { a, b } => grid.rows().iter().any(|cells| {
                let first_a = cells.iter().position(|&cell| cell == Some(a));
                let last_b = cells.iter().rposition(|&cell| cell == Some(b));
                matches!((first_a, last_b), (Some(ia), Some(ib)) if ia < ib)
            }),
            Self::NotInRow { a, row } => !grid.row(row).contains(&Some(a)),
            Self::NotInCol { a, col } => !grid.column(col).contains(&Some(a)),
            Self::ExactCountRow { a, row, count } => {
                grid.count_in_row(a, row) == usize::from(count)
            }
            Self::Adjacent { a, b } => grid.positions_of(a).any(|pa| {
                grid.positions_of(b)
                    .any(|pb| pa.manhattan_distance(pb) == 1)
            }),
            Self::SameMainDiagonal { a } => {
                // Diagonals are keyed by row - col (offset by 4) and row + col.
                let mut down = [0_u8; 2 * GRID_SIZE - 1];
                let mut up = [0_u8; 2 * GRID_SIZE - 1];
                grid.positions_of(a).any(|pos| {
                    let d = usize::from(pos.row) + (GRID_SIZE - 1) - usize::from(pos.col);
                    let u = usize::from(pos.row) + usize::from(pos.col);
                    down[d] += 1;
                    up[u] += 1;
                    down[d] >= 2 || up[u] >= 2
                })
            }
        }
    }

    /// Returns the cells a hint for this card should highlight.
    ///
    /// Row-scoped cards cover their row, column-scoped cards their column, and
    /// the remaining kinds the whole grid, in row-major order.
    #[must_use]
    pub fn affected_cells(&self) -> AffectedCells {
        match *self {
            Self::NotInRow { row, .. } | Self::ExactCountRow { row, .. } => {
                Position::row_positions(row).collect()
            }
            Self::NotInCol { col, .. } => Position::col_positions(col).collect(),
            Self::LeftOf { .. } | Self::Adjacent { .. } | Self::SameMainDiagonal { .. } => {
                Position::ALL.into_iter().collect()
            }
        }
    }
}

/// Returns `true` if `grid` currently satisfies `card`.
///
/// Free-function form of [`RuleCard::is_satisfied_by`].
#[must_use]
pub fn validate_rule_card(grid: &Grid, card: &RuleCard) -> bool {
    card.is_satisfied_by(grid)
}

/// Returns the cells a hint for `card` should highlight.
///
/// Free-function form of [`RuleCard::affected_cells`].
#[must_use]
pub fn get_affected_cells(card: &RuleCard) -> AffectedCells {
    card.affected_cells()
}

fn deserialize_index<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let index = u8::deserialize(deserializer)?;
    if usize::from(index) < GRID_SIZE {
        Ok(index)
    } else {
        Err(D::Error::invalid_value(
            Unexpected::Unsigned(u64::from(index)),
            &"an index from 0 to 4",
        ))
    }
}

impl Display for RuleCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LeftOf { a, b } => write!(f, "{a} is left of {b}"),
            Self::NotInRow { a, row } => write!(f, "No {a} in row {}", u16::from(row) + 1),
            Self::NotInCol { a, col } => write!(f, "No {a} in column {}", u16::from(col) + 1),
            Self::ExactCountRow { a, row, count } => {
                write!(f, "Row {} has exactly {count} {a}", u16::from(row) + 1)
            }
            Self::Adjacent { a, b } => write!(f, "{a} adjacent to {b}"),
            Self::SameMainDiagonal { a } => write!(f, "Two {a} on same diagonal"),
        }
    }
}
