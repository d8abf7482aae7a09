//! Scenewright - brief-to-scene writing assistant
//!
//! Scenewright turns a short free-text scene request (a *brief*) into a
//! structured outline, a first draft and an edited final scene. Drafts come
//! from a local Ollama server when one is reachable and are otherwise
//! assembled from fixed Portuguese fragments, so every brief yields a scene.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scenewright::{Brief, OllamaClient, ScenePipeline, ScenewrightConfig, Writer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScenewrightConfig::load()?;
//!     let client = OllamaClient::from_config(&config)?;
//!     let writer = Writer::connect(client, config.generation.clone()).await;
//!     let pipeline = ScenePipeline::new(writer, Default::default());
//!
//!     let outcome = pipeline
//!         .process(&Brief::from("Um encontro tenso no MASP, noite chuvosa."))
//!         .await;
//!     println!("{}", outcome.final_content());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `scenewright_error` - Error types
//! - `scenewright_core` - Briefs, features, plans and scene texts
//! - `scenewright_interface` - Generation backend traits
//! - `scenewright_config` - Layered configuration
//! - `scenewright_models` - Ollama client
//! - `scenewright_storage` - Project documents and output files
//! - `scenewright_pipeline` - Analyzer, planner, writer and editor
//!
//! This crate (`scenewright`) re-exports everything for convenience.

pub use scenewright_config::*;
pub use scenewright_core::*;
pub use scenewright_error::*;
pub use scenewright_interface::*;
pub use scenewright_models::*;
pub use scenewright_pipeline::*;
pub use scenewright_storage::*;
