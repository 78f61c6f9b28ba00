//! Clue kinds and sets of enabled clue kinds.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::RuleCardKindParseError;

/// The six kinds of rule card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCardKind {
    /// See [`RuleCard::LeftOf`](crate::RuleCard::LeftOf).
    LeftOf,
    /// See [`RuleCard::NotInRow`](crate::RuleCard::NotInRow).
    NotInRow,
    /// See [`RuleCard::NotInCol`](crate::RuleCard::NotInCol).
    NotInCol,
    /// See [`RuleCard::ExactCountRow`](crate::RuleCard::ExactCountRow).
    ExactCountRow,
    /// See [`RuleCard::Adjacent`](crate::RuleCard::Adjacent).
    Adjacent,
    /// See [`RuleCard::SameMainDiagonal`](crate::RuleCard::SameMainDiagonal).
    SameMainDiagonal,
}

impl RuleCardKind {
    /// All kinds, in candidate-derivation order.
    pub const ALL: [Self; 6] = [
        Self::LeftOf,
        Self::NotInRow,
        Self::NotInCol,
        Self::ExactCountRow,
        Self::Adjacent,
        Self::SameMainDiagonal,
    ];

    /// Returns the wire name of this kind, as used in feature-flag maps and in
    /// the `type` tag of a serialized rule card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftOf => "LEFT_OF",
            Self::NotInRow => "NOT_IN_ROW",
            Self::NotInCol => "NOT_IN_COL",
            Self::ExactCountRow => "EXACT_COUNT_ROW",
            Self::Adjacent => "ADJACENT",
            Self::SameMainDiagonal => "SAME_MAIN_DIAGONAL",
        }
    }

    /// Looks up a kind by its exact wire name.
    ///
    /// Unlike [`FromStr`], which accepts any letter case, this matches the
    /// `type` tag byte for byte.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the single-kind set for this kind.
    #[must_use]
    pub const fn as_set(self) -> RuleCardKinds {
        match self {
            Self::LeftOf => RuleCardKinds::LEFT_OF,
            Self::NotInRow => RuleCardKinds::NOT_IN_ROW,
            Self::NotInCol => RuleCardKinds::NOT_IN_COL,
            Self::ExactCountRow => RuleCardKinds::EXACT_COUNT_ROW,
            Self::Adjacent => RuleCardKinds::ADJACENT,
            Self::SameMainDiagonal => RuleCardKinds::SAME_MAIN_DIAGONAL,
        }
    }
}

impl Display for RuleCardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleCardKind {
    type Err = RuleCardKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RuleCardKindParseError { name: s.to_owned() })
    }
}

bitflags::bitflags! {
    /// A set of enabled rule-card kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulegrid_core::{RuleCardKind, RuleCardKinds};
    ///
    /// let kinds = RuleCardKinds::DEFAULT;
    /// assert!(kinds.contains_kind(RuleCardKind::LeftOf));
    /// assert!(!kinds.contains_kind(RuleCardKind::SameMainDiagonal));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleCardKinds: u8 {
        /// [`RuleCardKind::LeftOf`].
        const LEFT_OF = 1 << 0;
        /// [`RuleCardKind::NotInRow`].
        const NOT_IN_ROW = 1 << 1;
        /// [`RuleCardKind::NotInCol`].
        const NOT_IN_COL = 1 << 2;
        /// [`RuleCardKind::ExactCountRow`].
        const EXACT_COUNT_ROW = 1 << 3;
        /// [`RuleCardKind::Adjacent`].
        const ADJACENT = 1 << 4;
        /// [`RuleCardKind::SameMainDiagonal`].
        const SAME_MAIN_DIAGONAL = 1 << 5;
    }
}

impl RuleCardKinds {
    /// The kinds enabled when no feature flags say otherwise: every kind
    /// except [`RuleCardKind::SameMainDiagonal`].
    pub const DEFAULT: Self = Self::LEFT_OF
        .union(Self::NOT_IN_ROW)
        .union(Self::NOT_IN_COL)
        .union(Self::EXACT_COUNT_ROW)
        .union(Self::ADJACENT);

    /// Returns `true` if `kind` is in the set.
    #[must_use]
    pub const fn contains_kind(self, kind: RuleCardKind) -> bool {
        self.contains(kind.as_set())
    }

    /// Returns the kinds in the set, in candidate-derivation order.
    pub fn kinds(self) -> impl Iterator<Item = RuleCardKind> {
        RuleCardKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains_kind(kind))
    }

    /// Builds a set from a feature-flag map such as
    /// `{"LEFT_OF": true, "SAME_MAIN_DIAGONAL": false}`.
    ///
    /// Only keys mapped to `true` are enabled; a kind missing from the map is
    /// disabled. Keys must equal a wire name exactly (`"left_of"` enables
    /// nothing). Unknown keys are skipped with a warning.
    #[must_use]
    pub fn from_flags(flags: &BTreeMap<String, bool>) -> Self {
        let mut kinds = Self::empty();
        for (name, &enabled) in flags {
            match RuleCardKind::from_name(name) {
                Some(kind) => kinds.set(kind.as_set(), enabled),
                None => log::warn!("ignoring unknown rule card flag {name:?}"),
            }
        }
        kinds
    }

    /// Returns the feature-flag map describing this set, one entry per kind.
    #[must_use]
    pub fn to_flags(self) -> BTreeMap<String, bool> {
        RuleCardKind::ALL
            .into_iter()
            .map(|kind| (kind.name().to_owned(), self.contains_kind(kind)))
            .collect()
    }
}

impl Default for RuleCardKinds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromIterator<RuleCardKind> for RuleCardKinds {
    fn from_iter<T: IntoIterator<Item = RuleCardKind>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |kinds, kind| kinds | kind.as_set())
    }
}
