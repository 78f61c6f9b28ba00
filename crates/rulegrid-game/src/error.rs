/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A rule-card index was past the end of the puzzle's clue list.
    #[display("rule card index {index} out of range (puzzle has {len} cards)")]
    RuleCardOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of rule cards in the puzzle.
        len: usize,
    },
}
