//! Wire types for the Ollama native API.

use scenewright_core::GenerationRequest;
use scenewright_interface::LocalModel;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GenerateBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Sampling options of a generate call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub(crate) struct GenerateOptions {
    pub num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl<'a> GenerateBody<'a> {
    /// Body for a full draft request.
    pub fn from_request(model: &'a str, request: &'a GenerationRequest) -> Self {
        Self {
            model,
            prompt: request.prompt(),
            stream: false,
            options: GenerateOptions {
                num_predict: *request.max_output_tokens(),
                temperature: Some(*request.temperature()),
                top_p: Some(*request.top_p()),
                top_k: Some(*request.top_k()),
            },
        }
    }

    /// Body for a warm-up call; only the token budget is set.
    pub fn warmup(model: &'a str, prompt: &'a str, num_predict: u32) -> Self {
        Self {
            model,
            prompt,
            stream: false,
            options: GenerateOptions {
                num_predict,
                ..Default::default()
            },
        }
    }
}

/// Reply of `POST /api/generate` with `stream: false`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GenerateReply {
    #[serde(default)]
    pub response: String,
}

/// Reply of `GET /api/tags`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct TagsReply {
    #[serde(default)]
    pub models: Vec<LocalModel>,
}
