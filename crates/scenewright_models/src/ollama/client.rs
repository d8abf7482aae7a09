//! Ollama client over the native HTTP API.

use super::dto::{GenerateBody, GenerateReply, TagsReply};
use super::{OllamaError, OllamaErrorKind, OllamaResult};
use async_trait::async_trait;
use reqwest::Client;
use scenewright_config::{ProbeConfig, ScenewrightConfig};
use scenewright_core::{GenerationRequest, GenerationResponse};
use scenewright_error::{HttpError, ScenewrightResult};
use scenewright_interface::{Health, HealthStatus, LocalModel, ModelCatalog, TextGenerator};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default Ollama server URL.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Ollama client for local model execution.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// Shared HTTP client; timeouts are set per request
    client: Client,

    /// Model name (e.g., "llama3.1", "mistral")
    model_name: String,

    /// Ollama server URL without trailing slash
    base_url: String,

    /// Timeout of draft generation requests
    generation_timeout: Duration,

    /// Probe and warm-up settings
    probe: ProbeConfig,
}

impl OllamaClient {
    /// Create a client for `model_name` on the default localhost server.
    pub fn new(model_name: impl Into<String>) -> ScenewrightResult<Self> {
        Self::new_with_url(model_name, DEFAULT_OLLAMA_BASE_URL)
    }

    /// Create a client for `model_name` on a custom server URL, with default timeouts.
    pub fn new_with_url(
        model_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> ScenewrightResult<Self> {
        let defaults = ScenewrightConfig::default();
        Self::build(
            model_name.into(),
            base_url.into(),
            defaults.generation.timeout(),
            defaults.probe,
        )
    }

    /// Create a client from the `[provider]`, `[generation]` and `[probe]` sections.
    pub fn from_config(config: &ScenewrightConfig) -> ScenewrightResult<Self> {
        Self::build(
            config.provider.model.clone(),
            config.provider.base_url.clone(),
            config.generation.timeout(),
            config.probe.clone(),
        )
    }

    #[instrument(name = "ollama_client_new", skip(probe))]
    fn build(
        model_name: String,
        base_url: String,
        generation_timeout: Duration,
        probe: ProbeConfig,
    ) -> ScenewrightResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        info!(
            model = %model_name,
            url = %base_url,
            "Creating Ollama client"
        );

        let client = Client::builder()
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            model_name,
            base_url,
            generation_timeout,
            probe,
        })
    }

    /// Server root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify(&self, err: reqwest::Error, timeout: Duration) -> OllamaError {
        if err.is_timeout() {
            OllamaError::new(OllamaErrorKind::Timeout(timeout.as_secs()))
        } else if err.is_connect() {
            OllamaError::new(OllamaErrorKind::ServerNotRunning(self.base_url.clone()))
        } else if err.is_decode() {
            OllamaError::new(OllamaErrorKind::InvalidResponse(err.to_string()))
        } else {
            OllamaError::new(OllamaErrorKind::ApiError(err.to_string()))
        }
    }

    async fn tags(&self, timeout: Duration) -> OllamaResult<Vec<LocalModel>> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| self.classify(e, timeout))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::new(OllamaErrorKind::Status { code, body }));
        }

        let reply: TagsReply = response
            .json()
            .await
            .map_err(|e| OllamaError::new(OllamaErrorKind::InvalidResponse(e.to_string())))?;

        Ok(reply.models)
    }

    async fn post_generate(
        &self,
        body: &GenerateBody<'_>,
        timeout: Duration,
    ) -> OllamaResult<String> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| self.classify(e, timeout))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(code, "Ollama API error");
            return Err(OllamaError::new(OllamaErrorKind::Status { code, body }));
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| OllamaError::new(OllamaErrorKind::InvalidResponse(e.to_string())))?;

        Ok(reply.response.trim().to_string())
    }

    /// Check that the configured model is installed and answers a warm-up prompt.
    #[instrument(skip(self), fields(model = %self.model_name))]
    pub async fn validate(&self) -> OllamaResult<()> {
        debug!("Validating Ollama server and model availability");

        let models = self.tags(self.probe.models_timeout()).await?;
        debug!(count = models.len(), "Found local models");

        if !models.iter().any(|m| m.name.contains(&self.model_name)) {
            warn!(
                available = ?models.iter().map(|m| &m.name).collect::<Vec<_>>(),
                "Model not found locally"
            );
            return Err(OllamaError::new(OllamaErrorKind::ModelNotFound(
                self.model_name.clone(),
            )));
        }

        let warmup = GenerateBody::warmup(
            &self.model_name,
            &self.probe.warmup_prompt,
            self.probe.warmup_tokens,
        );
        self.post_generate(&warmup, self.probe.warmup_timeout())
            .await
            .map_err(|e| {
                OllamaError::new(OllamaErrorKind::ModelUnavailable(format!(
                    "{}: {}",
                    self.model_name, e.kind
                )))
            })?;

        debug!("Model warmed up");
        Ok(())
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    #[instrument(
        skip(self, req),
        fields(model = %self.model_name, prompt_length = req.prompt().len())
    )]
    async fn generate(&self, req: &GenerationRequest) -> ScenewrightResult<GenerationResponse> {
        self.validate().await?;

        info!(timeout_secs = self.generation_timeout.as_secs(), "Generating with Ollama");

        let body = GenerateBody::from_request(&self.model_name, req);
        let text = self.post_generate(&body, self.generation_timeout).await?;

        debug!(response_length = text.chars().count(), "Received response from Ollama");
        Ok(GenerationResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl Health for OllamaClient {
    #[instrument(skip(self))]
    async fn health(&self) -> ScenewrightResult<HealthStatus> {
        match self.tags(self.probe.availability_timeout()).await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => {
                debug!(error = %e.kind, "Ollama health check failed");
                Ok(HealthStatus::Unhealthy {
                    message: e.kind.to_string(),
                })
            }
        }
    }
}

#[async_trait]
impl ModelCatalog for OllamaClient {
    #[instrument(skip(self))]
    async fn list_models(&self) -> ScenewrightResult<Vec<LocalModel>> {
        Ok(self.tags(self.probe.models_timeout()).await?)
    }

    async fn ensure_model_loaded(&self) -> bool {
        match self.validate().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e.kind, "Model could not be loaded");
                false
            }
        }
    }
}
