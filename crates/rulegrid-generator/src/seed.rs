use std::{
    convert::Infallible,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// The seed a puzzle is generated from.
///
/// Any string is a valid seed. The same seed, difficulty and clue-kind set
/// always produce the same puzzle. Daily puzzles use a date-derived seed;
/// practice puzzles use [`PuzzleSeed::random`].
///
/// # Examples
///
/// ```
/// use rulegrid_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from("daily-2026-10-18");
/// assert_eq!(seed.as_str(), "daily-2026-10-18");
///
/// let random = PuzzleSeed::random();
/// assert_eq!(random.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleSeed(String);

impl PuzzleSeed {
    /// Creates a seed from any string.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Creates a fresh seed from the thread-local RNG, rendered as 32
    /// lowercase hex digits.
    #[must_use]
    pub fn random() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }

    /// Returns the seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PuzzleSeed {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for PuzzleSeed {
    fn from(seed: &str) -> Self {
        Self::new(seed)
    }
}

impl From<String> for PuzzleSeed {
    fn from(seed: String) -> Self {
        Self(seed)
    }
}
