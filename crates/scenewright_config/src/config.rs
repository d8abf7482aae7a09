//! Configuration structures.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from scenewright.toml)
//! - User overrides (./scenewright.toml or ~/.config/scenewright/scenewright.toml)
//! - Environment overrides (`SCENEWRIGHT__GENERATION__TEMPERATURE=0.6`)

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use scenewright_error::{ConfigError, ScenewrightError, ScenewrightResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../scenewright.toml");

/// Generation service selection.
///
/// ```toml
/// [provider]
/// name = "ollama"
/// model = "llama3.1"
/// base_url = "http://localhost:11434"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider name
    pub name: String,
    /// Model tag to generate with
    pub model: String,
    /// Server root URL
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "ollama".to_string(),
            model: "llama3.1".to_string(),
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

/// Fixed generation parameters sent with every draft request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Minimum trimmed draft length, in characters
    pub min_length: usize,
    /// Draft request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 800,
            temperature: 0.8,
            top_p: 0.9,
            top_k: 40,
            min_length: 50,
            timeout_secs: 120,
        }
    }
}

impl GenerationConfig {
    /// Draft request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Availability probe and warm-up settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timeout of the reachability probe
    pub availability_timeout_secs: u64,
    /// Timeout of the model listing
    pub models_timeout_secs: u64,
    /// Timeout of the warm-up generation
    pub warmup_timeout_secs: u64,
    /// Prompt sent to warm the model up
    pub warmup_prompt: String,
    /// Tokens requested by the warm-up
    pub warmup_tokens: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            availability_timeout_secs: 5,
            models_timeout_secs: 10,
            warmup_timeout_secs: 30,
            warmup_prompt: "Olá".to_string(),
            warmup_tokens: 5,
        }
    }
}

impl ProbeConfig {
    /// Reachability probe timeout.
    pub fn availability_timeout(&self) -> Duration {
        Duration::from_secs(self.availability_timeout_secs)
    }

    /// Model listing timeout.
    pub fn models_timeout(&self) -> Duration {
        Duration::from_secs(self.models_timeout_secs)
    }

    /// Warm-up generation timeout.
    pub fn warmup_timeout(&self) -> Duration {
        Duration::from_secs(self.warmup_timeout_secs)
    }
}

/// Where project documents are read from and scenes are written to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding `style_guide.md` and `canon/`
    pub data_dir: PathBuf,
    /// Directory receiving generated scenes
    pub output_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Top-level scenewright configuration.
///
/// # Example
///
/// ```no_run
/// use scenewright_config::ScenewrightConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScenewrightConfig::load()?;
/// println!("Model: {}", config.provider.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct ScenewrightConfig {
    /// Generation service selection
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Draft generation parameters
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Availability probe settings
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Project data and output locations
    #[serde(default)]
    pub project: ProjectConfig,
}

impl ScenewrightConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ScenewrightResult<Self> {
        Self::build(Self::defaults())
    }

    /// Load bundled defaults overlaid with one explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScenewrightResult<Self> {
        debug!("Loading configuration from file");

        Self::build(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    #[instrument]
    pub fn load() -> ScenewrightResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scenewright/scenewright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scenewright").required(false));

        Self::build(builder)
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ScenewrightResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ScenewrightError::from(ConfigError::new(format!(
                "Failed to render configuration: {}",
                e
            )))
        })
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> ScenewrightResult<Self> {
        builder
            .add_source(
                Environment::with_prefix("SCENEWRIGHT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                ScenewrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScenewrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
