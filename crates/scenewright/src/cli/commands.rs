//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scenewright - turn scene briefs into planned, drafted and edited prose
#[derive(Parser, Debug)]
#[command(name = "scenewright")]
#[command(about = "Turn scene briefs into planned, drafted and edited prose", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the user and local files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a scene from a brief
    Run {
        /// Scene brief
        #[arg(short, long)]
        brief: String,

        /// Where to save the final scene (defaults to the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also save a timestamped report with every stage
        #[arg(long)]
        report: bool,

        /// Do not show or report the scene plan
        #[arg(long)]
        no_plan: bool,

        /// Do not show or report the first draft
        #[arg(long)]
        no_draft: bool,
    },

    /// Print the scene plan for a brief
    Plan {
        /// Scene brief
        #[arg(short, long)]
        brief: String,
    },

    /// Print the features extracted from a brief
    Analyze {
        /// Scene brief
        #[arg(short, long)]
        brief: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Check the Ollama server, installed models and a test generation
    Diagnose,

    /// Print the effective configuration
    Config,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "scenewright",
            "run",
            "-b",
            "Noite chuvosa no MASP",
            "-o",
            "cena.md",
            "--report",
            "--no-draft",
        ])
        .expect("valid arguments");

        match cli.command {
            Commands::Run {
                brief,
                output,
                report,
                no_plan,
                no_draft,
            } => {
                assert_eq!(brief, "Noite chuvosa no MASP");
                assert_eq!(output, Some(PathBuf::from("cena.md")));
                assert!(report);
                assert!(!no_plan);
                assert!(no_draft);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scenewright",
            "analyze",
            "--brief",
            "café",
            "--format",
            "json",
            "-v",
            "--config",
            "custom.toml",
        ])
        .expect("valid arguments");

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Analyze {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_brief_is_required() {
        assert!(Cli::try_parse_from(["scenewright", "run"]).is_err());
    }
}
