//! Generation service clients for scenewright.
//!
//! Each provider lives behind its own feature flag. The `ollama` feature is
//! enabled by default and provides [`OllamaClient`], which talks to a local
//! Ollama server over its native HTTP API.
//!
//! ```no_run
//! # #[cfg(feature = "ollama")]
//! # {
//! use scenewright_config::ScenewrightConfig;
//! use scenewright_interface::Health;
//! use scenewright_models::OllamaClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScenewrightConfig::load()?;
//! let client = OllamaClient::from_config(&config)?;
//! println!("{}", client.health().await?);
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "ollama")]
mod ollama;

#[cfg(feature = "ollama")]
pub use ollama::{OllamaClient, OllamaError, OllamaErrorKind, OllamaResult};
