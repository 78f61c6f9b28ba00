use rulegrid_core::{Grid, RuleCard, SolutionHash, Symbol};
use serde::{Deserialize, Serialize};

use crate::{Difficulty, PuzzleSeed};

/// Whether a puzzle is the shared daily puzzle or a one-off practice puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    /// The puzzle of the day, keyed by date in the store.
    Daily,
    /// An on-demand puzzle. The generator always emits this kind.
    #[default]
    Practice,
}

/// A puzzle definition as shipped to the player.
///
/// It carries the clues and the solution fingerprint, but never the solution
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Daily or practice; callers relabel generated puzzles as needed.
    pub kind: PuzzleKind,
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
    /// The symbols the puzzle is played with.
    pub symbols: Vec<Symbol>,
    /// The clues, in display order.
    pub rule_cards: Vec<RuleCard>,
    /// Fingerprint of the solution's canonical form.
    pub solution_hash: SolutionHash,
}

/// How far the generator got in making the solution unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Uniqueness {
    /// The selected cards admit exactly one solution.
    Unique,
    /// The selected cards admitted several solutions. One extra card was
    /// appended if any was left, and the result was not checked again.
    Weak,
}

/// The output of the generator: a puzzle together with its solution.
///
/// The solution is for server-side use only. This type is deliberately not
/// serializable; send [`GeneratedPuzzle::puzzle`] to clients instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The client-facing puzzle definition.
    pub puzzle: Puzzle,
    /// The Latin square the clues were derived from.
    pub solution: Grid,
    /// Whether the clues were verified to pin down the solution.
    pub uniqueness: Uniqueness,
}

#[cfg(test)]
mod tests {
    use rulegrid_core::{DEFAULT_SYMBOLS, SymbolId};

    use super::*;

    #[test]
    fn test_puzzle_wire_form() {
        let puzzle = Puzzle {
            kind: PuzzleKind::Daily,
            seed: PuzzleSeed::from("daily-2026-10-18"),
            difficulty: Difficulty::default(),
            symbols: DEFAULT_SYMBOLS.to_vec(),
            rule_cards: vec![RuleCard::SameMainDiagonal { a: SymbolId::B }],
            solution_hash: SolutionHash::new("1f"),
        };
        let json: serde_json::Value = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(json["kind"], "daily");
        assert_eq!(json["seed"], "daily-2026-10-18");
        assert_eq!(json["difficulty"], 3);
        assert_eq!(json["symbols"].as_array().unwrap().len(), 5);
        assert_eq!(json["rule_cards"][0]["type"], "SAME_MAIN_DIAGONAL");
        assert_eq!(json["solution_hash"], "1f");

        let back: Puzzle = serde_json::from_value(json).unwrap();
        assert_eq!(back, puzzle);
    }

    #[test]
    fn test_stored_puzzle_with_out_of_range_card_is_rejected() {
        let puzzle = Puzzle {
            kind: PuzzleKind::Practice,
            seed: PuzzleSeed::from("stored"),
            difficulty: Difficulty::default(),
            symbols: DEFAULT_SYMBOLS.to_vec(),
            rule_cards: vec![RuleCard::NotInCol { a: SymbolId::A, col: 2 }],
            solution_hash: SolutionHash::new("1f"),
        };
        let mut json = serde_json::to_value(&puzzle).unwrap();
        json["rule_cards"][0]["col"] = 9.into();
        assert!(serde_json::from_value::<Puzzle>(json).is_err());
    }
}
