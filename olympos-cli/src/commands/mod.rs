//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Extract the sentences of a public-domain text that mention Olympus
#[derive(Debug, Parser)]
#[command(name = "olympos", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a text and print its Olympus sentences as one passage
    Process(process::ProcessArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::process::Stage;
    use crate::output::OutputFormat;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_defaults() {
        let cli = Cli::try_parse_from(["olympos", "process", "-i", "iliad.txt"]).unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input.unwrap().to_str(), Some("iliad.txt"));
                assert_eq!(args.emit, Stage::Final);
                assert!(args.format.is_none());
                assert!(!args.quiet);
                assert_eq!(args.verbose, 0);
            }
            other => panic!("Should be Process, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_process_options() {
        let cli = Cli::try_parse_from([
            "olympos",
            "process",
            "--url",
            "https://example.com/iliad.txt",
            "-f",
            "markdown",
            "--emit",
            "matched",
            "-t",
            "5",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.url.as_deref(), Some("https://example.com/iliad.txt"));
                assert_eq!(args.format, Some(OutputFormat::Markdown));
                assert_eq!(args.emit, Stage::Matched);
                assert_eq!(args.timeout, Some(5));
                assert_eq!(args.verbose, 2);
            }
            other => panic!("Should be Process, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_stage() {
        let result = Cli::try_parse_from(["olympos", "process", "--emit", "joined"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_generate_config_and_validate() {
        let cli =
            Cli::try_parse_from(["olympos", "generate-config", "-o", "olympos.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));

        let cli = Cli::try_parse_from(["olympos", "validate", "-c", "olympos.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["olympos"]).is_err());
    }
}
