//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scenewright binary.

mod commands;
mod config;
mod diagnose;
mod inspect;
mod run;

pub use commands::{Cli, Commands};
pub use config::{load_config, show_config};
pub use diagnose::run_diagnostics;
pub use inspect::{analyze_brief, plan_brief};
pub use run::{RunOptions, run_scene};
