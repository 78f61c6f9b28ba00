//! Puzzle symbol representation.

use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

/// Identifier of one of the five puzzle symbols.
///
/// Each row and each column of a solved grid contains every identifier exactly
/// once. The identifier is what grids, rule cards and the canonical form store;
/// the display glyph lives in [`Symbol`].
///
/// # Examples
///
/// ```
/// use rulegrid_core::SymbolId;
///
/// let id = SymbolId::C;
/// assert_eq!(id.index(), 2);
/// assert_eq!(id.as_char(), 'C');
/// assert_eq!(SymbolId::from_char('C'), Some(id));
///
/// for id in SymbolId::ALL {
///     println!("{id}");
/// }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum SymbolId {
    /// Symbol `A` (triangle).
    A = 0,
    /// Symbol `B` (circle).
    B = 1,
    /// Symbol `C` (square).
    C = 2,
    /// Symbol `D` (star).
    D = 3,
    /// Symbol `E` (diamond).
    E = 4,
}

impl SymbolId {
    /// All symbol identifiers in alphabet order.
    ///
    /// This order is the enumeration order of the solver and of candidate
    /// derivation, so it must not change.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Returns the zero-based position of this identifier in [`SymbolId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates an identifier from its zero-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-4.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            3 => Self::D,
            4 => Self::E,
            _ => panic!("Invalid symbol index: {index}"),
        }
    }

    /// Returns the single-character form used by the canonical grid text.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Parses the single-character form of an identifier.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }

    /// Parses an identifier from its string form (`"A"` through `"E"`).
    #[must_use]
    pub fn from_id_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Returns the default symbol definition for this identifier.
    #[must_use]
    pub fn symbol(self) -> &'static Symbol {
        &DEFAULT_SYMBOLS[self.index()]
    }
}

impl Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

/// A puzzle symbol: identifier plus its human-facing label and glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier stored in grids and rule cards.
    pub id: SymbolId,
    /// Human-readable name.
    pub label: Cow<'static, str>,
    /// Glyph shown on the board.
    pub glyph: Cow<'static, str>,
}

impl Symbol {
    const fn new(id: SymbolId, label: &'static str, glyph: &'static str) -> Self {
        Self {
            id,
            label: Cow::Borrowed(label),
            glyph: Cow::Borrowed(glyph),
        }
    }
}

/// The default symbol set, indexed by [`SymbolId::index`].
pub static DEFAULT_SYMBOLS: [Symbol; 5] = [
    Symbol::new(SymbolId::A, "Triangle", "▲"),
    Symbol::new(SymbolId::B, "Circle", "●"),
    Symbol::new(SymbolId::C, "Square", "■"),
    Symbol::new(SymbolId::D, "Star", "★"),
    Symbol::new(SymbolId::E, "Diamond", "◆"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(SymbolId::ALL.len(), 5);
        for (i, id) in SymbolId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(SymbolId::from_index(i), id);
            assert_eq!(SymbolId::from_char(id.as_char()), Some(id));
            assert_eq!(id.symbol().id, id);
        }

        assert_eq!(format!("{}", SymbolId::A), "A");
        assert_eq!(SymbolId::from_char('F'), None);
        assert_eq!(SymbolId::from_id_str("E"), Some(SymbolId::E));
        assert_eq!(SymbolId::from_id_str("EE"), None);
        assert_eq!(SymbolId::from_id_str(""), None);
    }

    #[test]
    fn test_default_symbols() {
        assert_eq!(SymbolId::A.symbol().glyph, "▲");
        assert_eq!(SymbolId::E.symbol().label, "Diamond");
    }

    #[test]
    fn test_serde_uses_bare_identifier() {
        assert_eq!(serde_json::to_string(&SymbolId::D).unwrap(), "\"D\"");
        let id: SymbolId = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(id, SymbolId::B);
    }

    #[test]
    #[should_panic(expected = "Invalid symbol index: 5")]
    fn test_from_index_out_of_range_panics() {
        let _ = SymbolId::from_index(5);
    }
}
