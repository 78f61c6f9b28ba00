use std::env;

use rulegrid_core::{RuleCardKinds, fingerprint::DEFAULT_SOLUTION_SALT};

/// Environment variable holding the server-side fingerprint salt.
pub const SOLUTION_SALT_ENV: &str = "PUZZLE_SOLUTION_HASH_SALT";

/// Settings shared by every puzzle a [`PuzzleGenerator`](crate::PuzzleGenerator)
/// produces.
///
/// # Examples
///
/// ```
/// use rulegrid_core::RuleCardKinds;
/// use rulegrid_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.enabled_rule_kinds, RuleCardKinds::DEFAULT);
/// assert_eq!(config.solution_salt, "default-salt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Kinds of rule card the generator may use.
    pub enabled_rule_kinds: RuleCardKinds,
    /// Salt mixed into solution fingerprints.
    pub solution_salt: String,
}

impl GeneratorConfig {
    /// Builds the default configuration, taking the salt from
    /// [`SOLUTION_SALT_ENV`] when it is set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let solution_salt = env::var(SOLUTION_SALT_ENV)
            .ok()
            .filter(|salt| !salt.is_empty());
        match solution_salt {
            Some(solution_salt) => Self {
                solution_salt,
                ..Self::default()
            },
            None => {
                log::debug!("{SOLUTION_SALT_ENV} is not set, using the default salt");
                Self::default()
            }
        }
    }

    /// Replaces the enabled rule-card kinds.
    #[must_use]
    pub fn with_rule_kinds(self, enabled_rule_kinds: RuleCardKinds) -> Self {
        Self {
            enabled_rule_kinds,
            ..self
        }
    }

    /// Replaces the fingerprint salt.
    #[must_use]
    pub fn with_solution_salt(self, solution_salt: impl Into<String>) -> Self {
        Self {
            solution_salt: solution_salt.into(),
            ..self
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled_rule_kinds: RuleCardKinds::DEFAULT,
            solution_salt: DEFAULT_SOLUTION_SALT.to_owned(),
        }
    }
}
