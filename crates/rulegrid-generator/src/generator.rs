use rulegrid_core::{DEFAULT_SYMBOLS, RuleCardKinds, grid_to_canonical, hash_solution};
use rulegrid_solver::count_solutions;

use crate::{
    Difficulty, GenerateError, GeneratedPuzzle, GeneratorConfig, Puzzle, PuzzleKind, PuzzleSeed,
    Uniqueness, derive_candidate_rule_cards, generate_latin_square, is_valid_latin_square,
    select_rule_cards,
};

/// Generates RuleGrid puzzles.
///
/// Generation runs these steps, each a pure function of the seed:
///
/// 1. [`generate_latin_square`] builds the solution.
/// 2. [`derive_candidate_rule_cards`] lists every clue the solution satisfies.
/// 3. [`select_rule_cards`] picks a difficulty-sized subset.
/// 4. The backtracking solver checks whether the subset pins down one
///    solution. If it does not, the first unused candidate is appended and
///    the puzzle is marked [`Uniqueness::Weak`]; it is not checked again.
/// 5. The solution's canonical form is fingerprinted.
///
/// # Examples
///
/// ```
/// use rulegrid_generator::{Difficulty, GeneratorConfig, PuzzleGenerator, PuzzleSeed};
/// use rulegrid_solver::verify_solution;
///
/// let generator = PuzzleGenerator::new(GeneratorConfig::default());
/// let seed = PuzzleSeed::from("seed");
/// let generated = generator.generate_with_seed(&seed, Difficulty::default())?;
/// assert!(verify_solution(&generated.solution, &generated.puzzle.rule_cards));
/// # Ok::<(), rulegrid_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(&PuzzleSeed::random(), difficulty)
    }

    /// Generates the puzzle for `seed` and `difficulty`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidLatinSquare`] if the solution fails the
    /// defensive Latin-square check, or [`GenerateError::NoCandidates`] if no
    /// clue of an enabled kind holds for it.
    pub fn generate_with_seed(
        &self,
        seed: &PuzzleSeed,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let solution = generate_latin_square(seed.as_str());
        if !is_valid_latin_square(&solution) {
            return Err(GenerateError::InvalidLatinSquare);
        }

        let candidates = derive_candidate_rule_cards(&solution, self.config.enabled_rule_kinds);
        if candidates.is_empty() {
            return Err(GenerateError::NoCandidates);
        }

        let mut rule_cards = select_rule_cards(&candidates, difficulty, seed.as_str());
        let uniqueness = if count_solutions(&rule_cards, 2) == 1 {
            Uniqueness::Unique
        } else {
            let extra = candidates
                .iter()
                .find(|&candidate| !rule_cards.contains(candidate))
                .copied();
            log::warn!(
                "rule cards for seed {seed:?} admit several solutions, appending {}",
                extra.map_or_else(|| "nothing".to_owned(), |card| format!("{card:?}"))
            );
            rule_cards.extend(extra);
            Uniqueness::Weak
        };

        let canonical = grid_to_canonical(&solution);
        let solution_hash = hash_solution(&canonical, seed.as_str(), &self.config.solution_salt);
        log::debug!(
            "generated puzzle for seed {seed:?} at difficulty {difficulty}: {} cards, {uniqueness:?}",
            rule_cards.len()
        );

        Ok(GeneratedPuzzle {
            puzzle: Puzzle {
                kind: PuzzleKind::Practice,
                seed: seed.clone(),
                difficulty,
                symbols: DEFAULT_SYMBOLS.to_vec(),
                rule_cards,
                solution_hash,
            },
            solution,
            uniqueness,
        })
    }
}

/// Generates the puzzle for `seed`, `difficulty` and `enabled_rule_kinds`.
///
/// The fingerprint salt comes from the environment, as in
/// [`GeneratorConfig::from_env`].
///
/// # Errors
///
/// See [`PuzzleGenerator::generate_with_seed`].
pub fn generate_puzzle(
    seed: &str,
    difficulty: Difficulty,
    enabled_rule_kinds: RuleCardKinds,
) -> Result<GeneratedPuzzle, GenerateError> {
    let config = GeneratorConfig::from_env().with_rule_kinds(enabled_rule_kinds);
    PuzzleGenerator::new(config).generate_with_seed(&PuzzleSeed::from(seed), difficulty)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rulegrid_core::{RuleCard, SymbolId::*, verify_solution_hash};
    use rulegrid_solver::verify_solution;

    use super::*;
    use crate::rule_card_count;

    fn generate(seed: &str, difficulty: u8) -> GeneratedPuzzle {
        PuzzleGenerator::default()
            .generate_with_seed(&PuzzleSeed::from(seed), Difficulty::new(difficulty).unwrap())
            .unwrap()
    }

    #[test]
    fn test_generates_valid_puzzle() {
        let generated = generate("test-seed-1", 3);
        let puzzle = &generated.puzzle;
        assert_eq!(puzzle.kind, PuzzleKind::Practice);
        assert_eq!(puzzle.seed.as_str(), "test-seed-1");
        assert_eq!(puzzle.symbols.len(), 5);
        assert!(!puzzle.rule_cards.is_empty());
        assert!(is_valid_latin_square(&generated.solution));
        assert!(verify_solution(&generated.solution, &puzzle.rule_cards));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = generate("reproducible-seed", 3);
        let b = generate("reproducible-seed", 3);
        assert_eq!(a.puzzle.solution_hash, b.puzzle.solution_hash);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate("seed-a", 3);
        let b = generate("seed-b", 3);
        assert_ne!(a.puzzle.solution_hash, b.puzzle.solution_hash);
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn test_known_puzzle() {
        let generated = generate("seed-a", 3);
        assert_eq!(generated.solution.to_string(), "ACEDB|DBCEA|CDABE|EABCD|BEDAC");
        assert_eq!(generated.puzzle.solution_hash.as_str(), "5bf431a4");
        // Five left-of cards only fix the order of a few pairs, so one more
        // card is appended and the result stays ambiguous.
        assert!(generated.uniqueness.is_weak());
        assert_eq!(
            generated.puzzle.rule_cards.last(),
            Some(&RuleCard::LeftOf { a: B, b: C })
        );
        assert!(count_solutions(&generated.puzzle.rule_cards, 2) > 1);
    }

    #[test]
    fn test_fallback_appends_at_most_one_card() {
        for d in 1..=5 {
            let generated = generate("difficulty-sweep", d);
            let expected = rule_card_count(generated.puzzle.difficulty);
            let extra = usize::from(generated.uniqueness.is_weak());
            assert_eq!(generated.puzzle.rule_cards.len(), expected + extra);
        }
    }

    #[test]
    fn test_hash_uses_configured_salt() {
        let seed = PuzzleSeed::from("salted");
        let generator =
            PuzzleGenerator::new(GeneratorConfig::default().with_solution_salt("pepper"));
        let generated = generator.generate_with_seed(&seed, Difficulty::MIN).unwrap();
        let canonical = grid_to_canonical(&generated.solution);
        assert!(verify_solution_hash(
            &canonical,
            seed.as_str(),
            &generated.puzzle.solution_hash,
            "pepper"
        ));
        assert!(!verify_solution_hash(
            &canonical,
            seed.as_str(),
            &generated.puzzle.solution_hash,
            "default-salt"
        ));
    }

    #[test]
    fn test_no_candidates() {
        // A Latin square never leaves a symbol out of a row.
        let config = GeneratorConfig::default().with_rule_kinds(RuleCardKinds::NOT_IN_ROW);
        let generator = PuzzleGenerator::new(config);
        let result = generator.generate_with_seed(&PuzzleSeed::from("x"), Difficulty::MIN);
        assert_eq!(result, Err(GenerateError::NoCandidates));

        let result = generate_puzzle("x", Difficulty::MIN, RuleCardKinds::empty());
        assert!(result.unwrap_err().is_no_candidates());
    }

    #[test]
    fn test_enabled_kinds_are_respected() {
        let kinds = RuleCardKinds::ADJACENT | RuleCardKinds::SAME_MAIN_DIAGONAL;
        let generated = generate_puzzle("kinds", Difficulty::MAX, kinds).unwrap();
        assert!(
            generated
                .puzzle
                .rule_cards
                .iter()
                .all(|card| kinds.contains_kind(card.kind()))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_generated_puzzles_are_sound(seed in ".{0,32}", difficulty in 1_u8..=5) {
            let generated = generate(&seed, difficulty);
            prop_assert!(is_valid_latin_square(&generated.solution));
            prop_assert!(verify_solution(&generated.solution, &generated.puzzle.rule_cards));
            let canonical = grid_to_canonical(&generated.solution);
            prop_assert!(verify_solution_hash(
                &canonical,
                &seed,
                &generated.puzzle.solution_hash,
                "default-salt",
            ));
        }
    }
}
