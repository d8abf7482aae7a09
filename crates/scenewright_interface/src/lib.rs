//! Trait definitions for scenewright generation backends.
//!
//! The writer only ever sees these traits, so tests drive it with scripted
//! backends and the binary plugs in the Ollama client.

mod traits;
mod types;

pub use traits::{Health, ModelCatalog, TextGenerator};
pub use types::{HealthStatus, LocalModel};
