use std::collections::BTreeMap;

use clap::{Args, Parser, Subcommand};
use rulegrid_core::{RuleCardKind, RuleCardKinds, fingerprint::DEFAULT_SOLUTION_SALT};
use rulegrid_generator::{Difficulty, GeneratorConfig, SOLUTION_SALT_ENV};

use crate::CliError;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Generate a puzzle and print it as JSON.
    Generate(GenerateArgs),
    /// Regenerate a puzzle and judge a submitted grid against it.
    Verify(VerifyArgs),
    /// Generate many puzzles and report how often the clues are ambiguous.
    Survey(SurveyArgs),
}

/// Options shared by every command that runs the generator.
#[derive(Debug, Args)]
pub(crate) struct GeneratorArgs {
    /// Difficulty from 1 to 5.
    #[arg(short, long, value_name = "LEVEL", default_value = "3", value_parser = parse_difficulty)]
    pub(crate) difficulty: Difficulty,

    /// Enabled rule-card kinds, comma separated (e.g. `LEFT_OF,ADJACENT`).
    #[arg(long, value_name = "KINDS", value_delimiter = ',', conflicts_with = "flags")]
    pub(crate) rules: Option<Vec<RuleCardKind>>,

    /// Enabled rule-card kinds as a feature-flag map (e.g. `{"ADJACENT":true}`).
    #[arg(long, value_name = "JSON")]
    pub(crate) flags: Option<String>,

    /// Salt for solution fingerprints.
    #[arg(
        long,
        env = SOLUTION_SALT_ENV,
        default_value = DEFAULT_SOLUTION_SALT,
        hide_env_values = true
    )]
    pub(crate) salt: String,
}

impl GeneratorArgs {
    pub(crate) fn config(&self) -> Result<GeneratorConfig, CliError> {
        let kinds = match (&self.rules, &self.flags) {
            (Some(rules), _) => rules.iter().copied().collect::<RuleCardKinds>(),
            (None, Some(flags)) => {
                let flags: BTreeMap<String, bool> = serde_json::from_str(flags)?;
                RuleCardKinds::from_flags(&flags)
            }
            (None, None) => RuleCardKinds::DEFAULT,
        };
        Ok(GeneratorConfig::default()
            .with_rule_kinds(kinds)
            .with_solution_salt(self.salt.clone()))
    }
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Seed to generate from. A random seed is used when omitted.
    #[arg(short, long)]
    pub(crate) seed: Option<String>,

    /// Label the puzzle as the daily puzzle.
    #[arg(long)]
    pub(crate) daily: bool,

    /// Include the solution in the output.
    #[arg(long)]
    pub(crate) show_solution: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub(crate) pretty: bool,

    #[command(flatten)]
    pub(crate) generator: GeneratorArgs,
}

#[derive(Debug, Args)]
pub(crate) struct VerifyArgs {
    /// Seed the puzzle was generated from.
    #[arg(short, long)]
    pub(crate) seed: String,

    /// Submitted grid in canonical form (e.g. `ABCDE|BCDEA|CDEAB|DEABC|EABCD`).
    #[arg(value_name = "GRID")]
    pub(crate) grid: String,

    #[command(flatten)]
    pub(crate) generator: GeneratorArgs,
}

#[derive(Debug, Args)]
pub(crate) struct SurveyArgs {
    /// Number of puzzles to generate.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1000)]
    pub(crate) count: usize,

    /// Prefix of the generated seeds; the puzzle index is appended.
    #[arg(long, default_value = "survey-")]
    pub(crate) prefix: String,

    #[command(flatten)]
    pub(crate) generator: GeneratorArgs,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    let value = s.parse::<u8>().map_err(|err| err.to_string())?;
    Difficulty::new(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rule_kinds_from_args() {
        let cli = Cli::parse_from(["rulegrid", "generate", "--rules", "left_of,ADJACENT"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let config = args.generator.config().unwrap();
        assert_eq!(
            config.enabled_rule_kinds,
            RuleCardKinds::LEFT_OF | RuleCardKinds::ADJACENT
        );
        assert_eq!(args.generator.difficulty, Difficulty::default());
    }

    #[test]
    fn test_rule_kinds_from_flags() {
        let cli = Cli::parse_from([
            "rulegrid",
            "survey",
            "--flags",
            r#"{"SAME_MAIN_DIAGONAL": true, "LEFT_OF": false}"#,
            "-d",
            "5",
        ]);
        let Command::Survey(args) = cli.command else {
            panic!("expected survey");
        };
        let config = args.generator.config().unwrap();
        assert_eq!(config.enabled_rule_kinds, RuleCardKinds::SAME_MAIN_DIAGONAL);
        assert_eq!(args.generator.difficulty, Difficulty::MAX);
    }

    #[test]
    fn test_rejects_bad_difficulty() {
        assert!(Cli::try_parse_from(["rulegrid", "generate", "-d", "0"]).is_err());
        assert!(Cli::try_parse_from(["rulegrid", "generate", "-d", "six"]).is_err());
    }
}
