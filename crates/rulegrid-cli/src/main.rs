//! Command-line front end for the RuleGrid puzzle engine.
//!
//! ```sh
//! rulegrid generate --seed daily-2026-10-18 --daily
//! rulegrid verify --seed daily-2026-10-18 'ABCDE|BCDEA|CDEAB|DEABC|EABCD'
//! rulegrid survey --count 10000 --difficulty 5
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::process::ExitCode;

use clap::Parser as _;
use rulegrid_core::GridParseError;
use rulegrid_generator::GenerateError;

use crate::args::{Cli, Command};

mod args;
mod commands;
mod survey;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to generate puzzle: {_0}")]
    Generate(GenerateError),
    #[display("invalid grid: {_0}")]
    Grid(GridParseError),
    #[display("invalid JSON: {_0}")]
    Json(serde_json::Error),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => commands::generate(&args),
        Command::Verify(args) => commands::verify(&args),
        Command::Survey(args) => survey::run(&args),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
