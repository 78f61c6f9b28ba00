/// Errors returned when parsing a grid from text or from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input did not contain exactly five rows.
    #[display("expected 5 rows, found {count}")]
    InvalidRowCount {
        /// Number of rows found.
        count: usize,
    },
    /// A row did not contain exactly five cells.
    #[display("expected 5 cells in row {row}, found {len}")]
    InvalidRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// A cell held something other than a symbol identifier or an empty marker.
    #[display("invalid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending cell text.
        symbol: String,
    },
}

/// Error returned when a clue-kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown rule card kind: {name:?}")]
pub struct RuleCardKindParseError {
    /// The unrecognised name.
    pub name: String,
}
