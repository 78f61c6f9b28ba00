use std::process::ExitCode;

use rayon::prelude::*;
use rulegrid_generator::{PuzzleGenerator, PuzzleSeed};
use rulegrid_solver::count_solutions;

use crate::{CliError, args::SurveyArgs};

/// Per-puzzle outcome of a survey run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The selected cards were unique on their own.
    Unique,
    /// The fallback card made the puzzle unique.
    RepairedByFallback,
    /// The puzzle still has several solutions after the fallback.
    Ambiguous,
    /// Generation failed.
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    unique: usize,
    repaired: usize,
    ambiguous: usize,
    failed: usize,
}

impl Tally {
    fn add(mut self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Unique => self.unique += 1,
            Outcome::RepairedByFallback => self.repaired += 1,
            Outcome::Ambiguous => self.ambiguous += 1,
            Outcome::Failed => self.failed += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            unique: self.unique + other.unique,
            repaired: self.repaired + other.repaired,
            ambiguous: self.ambiguous + other.ambiguous,
            failed: self.failed + other.failed,
        }
    }

    fn total(self) -> usize {
        self.unique + self.repaired + self.ambiguous + self.failed
    }
}

fn classify(generator: &PuzzleGenerator, args: &SurveyArgs, index: usize) -> Outcome {
    let seed = PuzzleSeed::new(format!("{}{index}", args.prefix));
    match generator.generate_with_seed(&seed, args.generator.difficulty) {
        Ok(generated) if generated.uniqueness.is_unique() => Outcome::Unique,
        Ok(generated) => {
            if count_solutions(&generated.puzzle.rule_cards, 2) == 1 {
                Outcome::RepairedByFallback
            } else {
                Outcome::Ambiguous
            }
        }
        Err(err) => {
            log::warn!("survey seed {seed}: {err}");
            Outcome::Failed
        }
    }
}

fn percent(part: usize, total: usize) -> f64 {
    #[expect(clippy::cast_precision_loss)]
    let ratio = part as f64 / total.max(1) as f64;
    ratio * 100.0
}

pub(crate) fn run(args: &SurveyArgs) -> Result<ExitCode, CliError> {
    let generator = PuzzleGenerator::new(args.generator.config()?);

    let tally = (0..args.count)
        .into_par_iter()
        .map(|index| classify(&generator, args, index))
        .fold(Tally::default, Tally::add)
        .reduce(Tally::default, Tally::merge);

    let total = tally.total();
    println!("Survey:");
    println!("  Seeds: {}0..{}{}", args.prefix, args.prefix, args.count);
    println!("  Difficulty: {}", args.generator.difficulty);
    println!();
    println!("Results:");
    for (label, count) in [
        ("unique", tally.unique),
        ("unique after fallback", tally.repaired),
        ("ambiguous after fallback", tally.ambiguous),
        ("failed", tally.failed),
    ] {
        println!("  {label}: {count} ({:.1}%)", percent(count, total));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let tally = [
            Outcome::Unique,
            Outcome::Ambiguous,
            Outcome::Ambiguous,
            Outcome::Failed,
        ]
        .into_iter()
        .fold(Tally::default(), Tally::add);
        assert_eq!(tally.ambiguous, 2);
        assert_eq!(tally.total(), 4);

        let merged = tally.merge(Tally::default().add(Outcome::RepairedByFallback));
        assert_eq!(merged.repaired, 1);
        assert_eq!(merged.total(), 5);
    }

    #[test]
    fn test_percent() {
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percent(0, 0).abs() < f64::EPSILON);
    }
}
