use std::process::ExitCode;

use rulegrid_core::{Grid, canonical_to_grid};
use rulegrid_game::{SubmissionVerdict, check_submission};
use rulegrid_generator::{GeneratedPuzzle, Puzzle, PuzzleGenerator, PuzzleKind, PuzzleSeed};
use serde::Serialize;

use crate::{
    CliError,
    args::{GenerateArgs, VerifyArgs},
};

#[derive(Debug, Serialize)]
struct GenerateOutput {
    puzzle: Puzzle,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique: Option<bool>,
}

fn generate_output(args: &GenerateArgs) -> Result<GenerateOutput, CliError> {
    let generator = PuzzleGenerator::new(args.generator.config()?);
    let seed = args
        .seed
        .as_deref()
        .map_or_else(PuzzleSeed::random, PuzzleSeed::from);
    let GeneratedPuzzle {
        mut puzzle,
        solution,
        uniqueness,
    } = generator.generate_with_seed(&seed, args.generator.difficulty)?;
    if args.daily {
        puzzle.kind = PuzzleKind::Daily;
    }

    Ok(GenerateOutput {
        puzzle,
        solution: args.show_solution.then_some(solution),
        unique: args.show_solution.then_some(uniqueness.is_unique()),
    })
}

pub(crate) fn generate(args: &GenerateArgs) -> Result<ExitCode, CliError> {
    let output = generate_output(args)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

fn judge(args: &VerifyArgs) -> Result<SubmissionVerdict, CliError> {
    let config = args.generator.config()?;
    let grid = canonical_to_grid(args.grid.trim())?;
    let seed = PuzzleSeed::from(args.seed.as_str());
    let generated = PuzzleGenerator::new(config.clone())
        .generate_with_seed(&seed, args.generator.difficulty)?;
    Ok(check_submission(
        &grid,
        &generated.puzzle,
        &config.solution_salt,
    ))
}

pub(crate) fn verify(args: &VerifyArgs) -> Result<ExitCode, CliError> {
    let verdict = judge(args)?;
    println!("{}", serde_json::to_string(&verdict)?);
    if verdict.is_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
