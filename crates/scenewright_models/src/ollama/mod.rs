//! Ollama client implementation.

mod client;
mod dto;
mod error;

pub use client::OllamaClient;
pub use error::{OllamaError, OllamaErrorKind, OllamaResult};
