//! Scenewright CLI binary.
//!
//! This binary provides command-line access to the scene pipeline:
//! - Generate a planned, drafted and edited scene from a brief
//! - Inspect the outline or extracted features of a brief
//! - Diagnose the local Ollama server

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, analyze_brief, load_config, plan_brief, run_diagnostics, run_scene,
        show_config,
    };

    // Load .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing, RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Run {
            brief,
            output,
            report,
            no_plan,
            no_draft,
        } => {
            let options = cli::RunOptions::new(output, report, !no_plan, !no_draft);
            run_scene(&config, &brief, &options).await?;
        }

        Commands::Plan { brief } => {
            plan_brief(&brief);
        }

        Commands::Analyze { brief, format } => {
            analyze_brief(&brief, format)?;
        }

        Commands::Diagnose => {
            run_diagnostics(&config).await?;
        }

        Commands::Config => {
            show_config(&config)?;
        }
    }

    Ok(())
}
