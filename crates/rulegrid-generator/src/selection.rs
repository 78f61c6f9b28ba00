use rulegrid_core::RuleCard;

use crate::Difficulty;

/// Minimum number of cards in a puzzle.
const BASE_CARD_COUNT: usize = 4;
/// Maximum number of cards chosen by the selector.
const MAX_CARD_COUNT: usize = 6;
/// Modulus of the selection key.
const KEY_MODULUS: i64 = 1000;

/// Number of rule cards the selector picks for `difficulty`:
/// `min(4 + difficulty / 2, 6)`.
///
/// | difficulty | cards |
/// |---|---|
/// | 1 | 4 |
/// | 2, 3 | 5 |
/// | 4, 5 | 6 |
#[must_use]
pub fn rule_card_count(difficulty: Difficulty) -> usize {
    usize::min(
        BASE_CARD_COUNT + usize::from(difficulty.get()) / 2,
        MAX_CARD_COUNT,
    )
}

/// Picks up to [`rule_card_count`] cards from `candidates`, deterministically
/// from `seed`.
///
/// Each candidate gets the key `(selection_hash(seed) + len) % 1000`, where
/// `len` is the length of its compact JSON form, and the candidates are
/// stably sorted by key before the prefix is taken. The ordering only depends
/// on the card's kind and operand widths, not on how hard it is.
///
/// # Examples
///
/// ```
/// use rulegrid_core::{RuleCard, SymbolId::*};
/// use rulegrid_generator::{Difficulty, select_rule_cards};
///
/// let candidates = vec![
///     RuleCard::SameMainDiagonal { a: A },
///     RuleCard::LeftOf { a: A, b: B },
/// ];
/// let selected = select_rule_cards(&candidates, Difficulty::default(), "seed");
/// assert_eq!(selected.len(), 2);
/// ```
#[must_use]
pub fn select_rule_cards(
    candidates: &[RuleCard],
    difficulty: Difficulty,
    seed: &str,
) -> Vec<RuleCard> {
    let hash = selection_hash(seed);
    let mut keyed: Vec<_> = candidates
        .iter()
        .map(|card| ((hash + serialized_len(card)) % KEY_MODULUS, *card))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed
        .into_iter()
        .take(rule_card_count(difficulty))
        .map(|(_, card)| card)
        .collect()
}

/// Seed hash used to order candidates.
///
/// Each step is `(hash << 5) - hash + unit` over the UTF-16 units of `seed`,
/// where only the shift wraps to 32 bits. The running value is not truncated,
/// so it can drift outside the `i32` range for long seeds and may be negative.
#[must_use]
pub fn selection_hash(seed: &str) -> i64 {
    seed.encode_utf16().fold(0_i64, |hash, unit| {
        #[expect(clippy::cast_possible_truncation)]
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        shifted - hash + i64::from(unit)
    })
}

fn serialized_len(card: &RuleCard) -> i64 {
    // A rule card is a flat map of short strings and small integers, which
    // serde_json always serializes; an error means a broken `Serialize` impl.
    let json = serde_json::to_string(card);
    debug_assert!(json.is_ok(), "rule card failed to serialize: {json:?}");
    json.map_or(0, |json| i64::try_from(json.len()).unwrap_or(i64::MAX))
}
