//! Non-cryptographic solution fingerprints.
//!
//! The fingerprint lets the server notice that a submitted grid differs from
//! the one it generated. It is a 32-bit polynomial rolling hash and offers no
//! protection against a determined adversary.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Salt used when the deployment does not configure one.
pub const DEFAULT_SOLUTION_SALT: &str = "default-salt";

/// Polynomial rolling hash with 32-bit two's-complement wraparound.
///
/// Each step computes `hash * 31 + unit` over the UTF-16 code units of `text`,
/// wrapping at 2^32 and reading the result as a signed 32-bit integer.
///
/// # Examples
///
/// ```
/// use rulegrid_core::fingerprint::rolling_hash;
///
/// assert_eq!(rolling_hash(""), 0);
/// assert_eq!(rolling_hash("a"), 97);
/// assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
/// ```
#[must_use]
pub fn rolling_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// A solution fingerprint: lowercase hex of the absolute rolling hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionHash(String);

impl SolutionHash {
    /// Wraps an existing fingerprint string, e.g. one loaded from storage.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the fingerprint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SolutionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the fingerprint of a canonical grid for `seed`, salted with `salt`.
///
/// The hashed text is `"{canonical}:{seed}:{salt}"`. The absolute value of
/// `i32::MIN` is taken as 2^31, so it renders as `80000000`.
///
/// # Examples
///
/// ```
/// use rulegrid_core::fingerprint::{hash_solution, verify_solution_hash};
///
/// let canonical = "ABCDE|BCDEA|CDEAB|DEABC|EABCD";
/// let hash = hash_solution(canonical, "seed", "salt");
/// assert!(verify_solution_hash(canonical, "seed", &hash, "salt"));
/// assert!(!verify_solution_hash(canonical, "other-seed", &hash, "salt"));
/// ```
#[must_use]
pub fn hash_solution(canonical: &str, seed: &str, salt: &str) -> SolutionHash {
    let hash = rolling_hash(&format!("{canonical}:{seed}:{salt}"));
    SolutionHash(format!("{:x}", hash.unsigned_abs()))
}

/// Returns `true` if `canonical` hashes to `expected` for `seed` and `salt`.
#[must_use]
pub fn verify_solution_hash(
    canonical: &str,
    seed: &str,
    expected: &SolutionHash,
    salt: &str,
) -> bool {
    hash_solution(canonical, seed, salt) == *expected
}
