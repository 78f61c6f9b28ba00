use rulegrid_core::{GRID_SIZE, Grid, RuleCard, RuleCardKind, RuleCardKinds, SymbolId};

/// Lists every rule card of an enabled kind that `grid` satisfies.
///
/// Kinds are scanned in [`RuleCardKind::ALL`] order and operands in symbol
/// then index order, so the output order is stable for a given grid:
///
/// - `LeftOf` and `Adjacent`: every ordered pair of distinct symbols.
/// - `NotInRow` and `NotInCol`: every symbol and row/column index.
/// - `ExactCountRow`: every symbol and row, with the count actually found in
///   that row when it is 0 or 1.
/// - `SameMainDiagonal`: every symbol.
///
/// Each card is kept only if [`RuleCard::is_satisfied_by`] accepts it, so
/// the result is always sound for `grid`. An empty result means no puzzle can
/// be built from this grid and kind set.
///
/// # Examples
///
/// ```
/// use rulegrid_core::{Grid, RuleCardKinds};
/// use rulegrid_generator::derive_candidate_rule_cards;
///
/// let grid: Grid = "ABCDE|BCDEA|CDEAB|DEABC|EABCD".parse()?;
/// let candidates = derive_candidate_rule_cards(&grid, RuleCardKinds::DEFAULT);
/// assert!(candidates.iter().all(|card| card.is_satisfied_by(&grid)));
/// assert!(derive_candidate_rule_cards(&grid, RuleCardKinds::empty()).is_empty());
/// # Ok::<(), rulegrid_core::GridParseError>(())
/// ```
#[must_use]
pub fn derive_candidate_rule_cards(grid: &Grid, kinds: RuleCardKinds) -> Vec<RuleCard> {
    let mut candidates = vec![];
    let mut push_if_valid = |card: RuleCard| {
        if card.is_satisfied_by(grid) {
            candidates.push(card);
        }
    };

    for kind in kinds.kinds() {
        match kind {
            RuleCardKind::LeftOf => {
                for (a, b) in distinct_pairs() {
                    push_if_valid(RuleCard::LeftOf { a, b });
                }
            }
            RuleCardKind::NotInRow => {
                for (a, row) in symbol_indices() {
                    push_if_valid(RuleCard::NotInRow { a, row });
                }
            }
            RuleCardKind::NotInCol => {
                for (a, col) in symbol_indices() {
                    push_if_valid(RuleCard::NotInCol { a, col });
                }
            }
            RuleCardKind::ExactCountRow => {
                for (a, row) in symbol_indices() {
                    let count = grid.count_in_row(a, row);
                    if count <= 1 {
                        #[expect(clippy::cast_possible_truncation)]
                        let count = count as u8;
                        push_if_valid(RuleCard::ExactCountRow { a, row, count });
                    }
                }
            }
            RuleCardKind::Adjacent => {
                for (a, b) in distinct_pairs() {
                    push_if_valid(RuleCard::Adjacent { a, b });
                }
            }
            RuleCardKind::SameMainDiagonal => {
                for a in SymbolId::ALL {
                    push_if_valid(RuleCard::SameMainDiagonal { a });
                }
            }
        }
    }

    log::debug!(
        "derived {} candidate rule cards for {grid} ({kinds:?})",
        candidates.len()
    );
    candidates
}

fn distinct_pairs() -> impl Iterator<Item = (SymbolId, SymbolId)> {
    SymbolId::ALL.into_iter().flat_map(|a| {
        SymbolId::ALL
            .into_iter()
            .filter(move |&b| b != a)
            .map(move |b| (a, b))
    })
}

fn symbol_indices() -> impl Iterator<Item = (SymbolId, u8)> {
    #[expect(clippy::cast_possible_truncation)]
    const SIZE: u8 = GRID_SIZE as u8;
    SymbolId::ALL
        .into_iter()
        .flat_map(|a| (0..SIZE).map(move |i| (a, i)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rulegrid_core::SymbolId::*;

    use super::*;
    use crate::generate_latin_square;

    fn cyclic_grid() -> Grid {
        "ABCDE|BCDEA|CDEAB|DEABC|EABCD".parse().unwrap()
    }

    fn count_kind(cards: &[RuleCard], kind: RuleCardKind) -> usize {
        cards.iter().filter(|card| card.kind() == kind).count()
    }

    #[test]
    fn test_cyclic_grid_candidates() {
        let cards = derive_candidate_rule_cards(&cyclic_grid(), RuleCardKinds::all());
        // Every ordered pair shows up left-to-right in some row of a cyclic square.
        assert_eq!(count_kind(&cards, RuleCardKind::LeftOf), 20);
        // A Latin square has every symbol in every row and column.
        assert_eq!(count_kind(&cards, RuleCardKind::NotInRow), 0);
        assert_eq!(count_kind(&cards, RuleCardKind::NotInCol), 0);
        assert_eq!(count_kind(&cards, RuleCardKind::ExactCountRow), 25);
        assert_eq!(count_kind(&cards, RuleCardKind::Adjacent), 10);
        assert_eq!(count_kind(&cards, RuleCardKind::SameMainDiagonal), 5);
        assert_eq!(cards.len(), 60);
    }

    #[test]
    fn test_output_order() {
        let cards = derive_candidate_rule_cards(&cyclic_grid(), RuleCardKinds::DEFAULT);
        assert_eq!(cards[0], RuleCard::LeftOf { a: A, b: B });
        assert_eq!(cards[1], RuleCard::LeftOf { a: A, b: C });
        assert_eq!(
            cards[20],
            RuleCard::ExactCountRow {
                a: A,
                row: 0,
                count: 1
            }
        );
        assert_eq!(
            cards[21],
            RuleCard::ExactCountRow {
                a: A,
                row: 1,
                count: 1
            }
        );
        assert_eq!(cards.last(), Some(&RuleCard::Adjacent { a: E, b: D }));
    }

    #[test]
    fn test_kinds_filter() {
        let grid = cyclic_grid();
        let cards = derive_candidate_rule_cards(&grid, RuleCardKinds::ADJACENT);
        assert_eq!(cards.len(), 10);
        assert!(cards.iter().all(|card| card.kind() == RuleCardKind::Adjacent));
        assert!(cards.contains(&RuleCard::Adjacent { a: A, b: B }));
        assert!(!cards.contains(&RuleCard::Adjacent { a: A, b: C }));

        assert!(derive_candidate_rule_cards(&grid, RuleCardKinds::NOT_IN_ROW).is_empty());
    }

    proptest! {
        #[test]
        fn prop_candidates_are_sound(seed in ".{0,24}", bits in 0_u8..64) {
            let grid = generate_latin_square(&seed);
            let kinds = RuleCardKinds::from_bits_truncate(bits);
            let cards = derive_candidate_rule_cards(&grid, kinds);
            for card in &cards {
                prop_assert!(kinds.contains_kind(card.kind()));
                prop_assert!(card.is_satisfied_by(&grid));
            }
        }
    }
}
