/// Errors that abort puzzle generation.
///
/// Neither is retried by the generator.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GenerateError {
    /// The generated solution failed the Latin-square check.
    #[display("generated grid is not a Latin square")]
    InvalidLatinSquare,
    /// No rule card of an enabled kind holds for the solution.
    #[display("no candidate rule cards for the enabled kinds")]
    NoCandidates,
}

/// Error returned when a difficulty is outside `1..=5`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("difficulty must be between 1 and 5, got {value}")]
pub struct DifficultyError {
    /// The rejected value.
    pub value: i64,
}
