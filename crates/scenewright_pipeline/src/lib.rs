//! Brief-to-scene pipeline.
//!
//! Four cooperating stages, leaf first:
//!
//! - [`analyze`] extracts a [`FeatureSet`](scenewright_core::FeatureSet) from a brief by keyword matching
//! - [`Planner`] renders a fixed-section outline from those features
//! - [`Writer`] drafts the scene through a [`TextGenerator`](scenewright_interface::TextGenerator),
//!   or assembles it from fixed fragments when the service is missing or unhelpful
//! - [`Editor`] applies the final text cleanups
//!
//! [`ScenePipeline`] runs them in order.
//!
//! # Example
//!
//! ```rust,ignore
//! use scenewright_pipeline::{ScenePipeline, Writer};
//! use scenewright_models::OllamaClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = scenewright_config::ScenewrightConfig::load()?;
//! let client = OllamaClient::from_config(&config)?;
//! let writer = Writer::connect(client, config.generation.clone()).await;
//! let pipeline = ScenePipeline::new(writer, Default::default());
//!
//! let outcome = pipeline.process(&"Um encontro tenso no MASP.".into()).await;
//! println!("{}", outcome.final_content());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod editor;
mod fallback;
mod pipeline;
mod planner;
mod writer;

pub use analyzer::analyze;
pub use editor::{Editor, LineKind};
pub use fallback::compose_fallback;
pub use pipeline::{SceneOutcome, ScenePipeline};
pub use planner::{Pacing, Planner, Progression};
pub use writer::{Writer, build_prompt};
