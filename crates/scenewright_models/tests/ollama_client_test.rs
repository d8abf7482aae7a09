//! Tests for the Ollama client.
//!
//! Tests marked `#[ignore]` require Ollama running locally with llama3.1 installed.
//! Install Ollama: https://ollama.ai/download
//! Pull model: ollama pull llama3.1
//!
//! Run with: cargo test --package scenewright_models -- --ignored

#![cfg(feature = "ollama")]

use scenewright_core::GenerationRequest;
use scenewright_error::{ModelsErrorKind, OllamaErrorKind, ScenewrightErrorKind};
use scenewright_interface::{Health, ModelCatalog, TextGenerator};
use scenewright_models::OllamaClient;

// Nothing listens on the TCP port 1 of the loopback interface.
const CLOSED_URL: &str = "http://127.0.0.1:1";

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest::builder()
        .prompt(prompt)
        .max_output_tokens(50u32)
        .temperature(0.7f32)
        .top_p(0.9f32)
        .top_k(40u32)
        .build()
        .expect("Valid request")
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let client = OllamaClient::new_with_url("llama3.1", "http://localhost:11434/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:11434");
    assert_eq!(client.provider_name(), "ollama");
    assert_eq!(client.model_name(), "llama3.1");
}

#[tokio::test]
async fn test_health_reports_unreachable_server_as_unhealthy() {
    let client = OllamaClient::new_with_url("llama3.1", CLOSED_URL).unwrap();

    let status = client.health().await.expect("health never errors");
    assert!(!status.is_healthy());
}

#[tokio::test]
async fn test_generate_against_unreachable_server_fails_without_panicking() {
    let client = OllamaClient::new_with_url("llama3.1", CLOSED_URL).unwrap();

    assert!(!client.ensure_model_loaded().await);

    let err = client.generate(&request("Olá")).await.unwrap_err();
    match err.kind() {
        ScenewrightErrorKind::Models(models) => {
            assert!(matches!(
                models.kind,
                ModelsErrorKind::Ollama(OllamaErrorKind::ServerNotRunning(_))
                    | ModelsErrorKind::Ollama(OllamaErrorKind::ApiError(_))
            ));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
#[ignore] // Requires Ollama running locally
async fn test_ollama_basic_generation() -> anyhow::Result<()> {
    let client = OllamaClient::new("llama3.1")?;

    assert!(client.health().await?.is_healthy());
    assert!(client.ensure_model_loaded().await);

    let response = client
        .generate(&request("Escreva uma frase simples sobre o tempo."))
        .await?;

    assert!(!response.text.is_empty());
    println!("Response: {}", response.text);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_ollama_lists_models() -> anyhow::Result<()> {
    let client = OllamaClient::new("llama3.1")?;

    let models = client.list_models().await?;
    assert!(models.iter().any(|m| m.name.contains("llama3.1")));
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_ollama_missing_model_is_not_loaded() -> anyhow::Result<()> {
    let client = OllamaClient::new("nonexistent_model")?;

    assert!(!client.ensure_model_loaded().await);
    Ok(())
}
