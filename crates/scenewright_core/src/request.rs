//! Request and response types for the generation service.

use serde::{Deserialize, Serialize};

/// Single-prompt generation request.
///
/// # Examples
///
/// ```
/// use scenewright_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Escreva uma cena.")
///     .max_output_tokens(800u32)
///     .temperature(0.8f32)
///     .top_p(0.9f32)
///     .top_k(40u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.max_output_tokens(), 800);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Full prompt text
    prompt: String,
    /// Maximum number of tokens to generate
    max_output_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling threshold
    top_p: f32,
    /// Top-k sampling cutoff
    top_k: u32,
}

impl GenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// Generated text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub text: String,
}
