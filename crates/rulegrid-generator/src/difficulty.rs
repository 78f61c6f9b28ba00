use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::DifficultyError;

/// Puzzle difficulty, from 1 (easiest) to 5.
///
/// Difficulty only controls how many rule cards a puzzle shows (see
/// [`rule_card_count`](crate::rule_card_count)).
///
/// # Examples
///
/// ```
/// use rulegrid_generator::Difficulty;
///
/// assert_eq!(Difficulty::default().get(), 3);
/// assert!(Difficulty::new(6).is_err());
/// assert_eq!(Difficulty::clamped(42).get(), 5);
/// assert_eq!(Difficulty::clamped(-1).get(), 1);
/// assert_eq!(Difficulty::clamped(0).get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// The easiest difficulty.
    pub const MIN: Self = Self(1);
    /// The hardest difficulty.
    pub const MAX: Self = Self(5);

    /// Creates a difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`DifficultyError`] if `value` is outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, DifficultyError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DifficultyError {
                value: i64::from(value),
            })
        }
    }

    /// Creates a difficulty from a loosely parsed request value.
    ///
    /// Zero stands for "not given" and maps to the default; any other integer
    /// is clamped into `1..=5`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        if value == 0 {
            return Self::default();
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8;
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}
