//! Trait definitions for text generation backends and their capabilities.

use crate::{HealthStatus, LocalModel};
use async_trait::async_trait;
use scenewright_core::{GenerationRequest, GenerationResponse};
use scenewright_error::ScenewrightResult;

/// Core trait that all generation backends must implement.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, req: &GenerationRequest) -> ScenewrightResult<GenerationResponse>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3.1").
    fn model_name(&self) -> &str;
}

/// Trait for backends that can report whether they are reachable.
#[async_trait]
pub trait Health: TextGenerator {
    /// Check if the backend is available and functioning.
    async fn health(&self) -> ScenewrightResult<HealthStatus>;
}

/// Trait for backends that host several local models.
#[async_trait]
pub trait ModelCatalog: TextGenerator {
    /// Models installed on the backend.
    async fn list_models(&self) -> ScenewrightResult<Vec<LocalModel>>;

    /// Whether the configured model is installed and answers a warm-up prompt.
    async fn ensure_model_loaded(&self) -> bool;
}
