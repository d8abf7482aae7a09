//! Configuration command handlers.

use scenewright::{ScenewrightConfig, ScenewrightResult};
use std::path::Path;
use tracing::debug;

/// Load the configuration from an explicit file, or from the layered defaults.
pub fn load_config(path: Option<&Path>) -> ScenewrightResult<ScenewrightConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Using explicit configuration file");
            ScenewrightConfig::from_file(path)
        }
        None => ScenewrightConfig::load(),
    }
}

/// Print the effective configuration as TOML.
pub fn show_config(config: &ScenewrightConfig) -> ScenewrightResult<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
