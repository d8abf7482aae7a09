//! Ollama client behavior against a local server with canned responses.

#![cfg(feature = "ollama")]

mod test_utils;

use scenewright_core::GenerationRequest;
use scenewright_error::{ModelsErrorKind, OllamaErrorKind, ScenewrightError, ScenewrightErrorKind};
use scenewright_interface::{Health, ModelCatalog, TextGenerator};
use scenewright_models::OllamaClient;
use test_utils::{CannedResponse, FakeOllama};

const TAGS_WITH_LLAMA: &str =
    r#"{"models":[{"name":"llama3.1:8b","size":4920753328},{"name":"mistral:latest","size":4109865159}]}"#;
const TAGS_WITHOUT_LLAMA: &str = r#"{"models":[{"name":"mistral:latest","size":4109865159}]}"#;

fn request() -> GenerationRequest {
    GenerationRequest::builder()
        .prompt("Escreva uma frase simples sobre o tempo.")
        .max_output_tokens(50u32)
        .temperature(0.7f32)
        .top_p(0.9f32)
        .top_k(40u32)
        .build()
        .expect("Valid request")
}

fn ollama_kind(err: &ScenewrightError) -> &OllamaErrorKind {
    match err.kind() {
        ScenewrightErrorKind::Models(models) => match &models.kind {
            ModelsErrorKind::Ollama(kind) => kind,
            other => panic!("unexpected models error: {other}"),
        },
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_generate_returns_trimmed_text() {
    let server = FakeOllama::start(
        CannedResponse::ok(TAGS_WITH_LLAMA),
        CannedResponse::ok(r#"{"response":"  O céu amanheceu cinzento.  \n","done":true}"#),
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.1", server.base_url()).unwrap();

    assert!(client.health().await.unwrap().is_healthy());
    assert!(client.ensure_model_loaded().await);

    let response = client.generate(&request()).await.expect("generation succeeds");
    assert_eq!(response.text, "O céu amanheceu cinzento.");
}

#[tokio::test]
async fn test_list_models_reads_names_and_sizes() {
    let server = FakeOllama::start(
        CannedResponse::ok(TAGS_WITH_LLAMA),
        CannedResponse::ok(r#"{"response":""}"#),
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.1", server.base_url()).unwrap();

    let models = client.list_models().await.expect("models listed");
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "llama3.1:8b");
    assert_eq!(models[0].size, 4920753328);
}

#[tokio::test]
async fn test_error_status_maps_to_status_kind() {
    let server = FakeOllama::start(
        CannedResponse::status(500, "internal failure"),
        CannedResponse::ok(r#"{"response":""}"#),
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.1", server.base_url()).unwrap();

    let err = client.list_models().await.unwrap_err();
    assert_eq!(
        ollama_kind(&err),
        &OllamaErrorKind::Status {
            code: 500,
            body: "internal failure".to_string()
        }
    );

    let status = client.health().await.expect("health never errors");
    assert!(!status.is_healthy());
}

#[tokio::test]
async fn test_undecodable_body_maps_to_invalid_response() {
    let server = FakeOllama::start(
        CannedResponse::ok("this is not json"),
        CannedResponse::ok(r#"{"response":""}"#),
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.1", server.base_url()).unwrap();

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(
        ollama_kind(&err),
        OllamaErrorKind::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_unlisted_model_maps_to_model_not_found() {
    let server = FakeOllama::start(
        CannedResponse::ok(TAGS_WITHOUT_LLAMA),
        CannedResponse::ok(r#"{"response":"Olá"}"#),
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.1", server.base_url()).unwrap();

    let err = client.validate().await.unwrap_err();
    assert_eq!(err.kind, OllamaErrorKind::ModelNotFound("llama3.1".to_string()));
    assert!(!client.ensure_model_loaded().await);

    let err = client.generate(&request()).await.unwrap_err();
    assert!(matches!(ollama_kind(&err), OllamaErrorKind::ModelNotFound(_)));
}

#[tokio::test]
async fn test_failed_warmup_maps_to_model_unavailable() {
    let server = FakeOllama::start(
        CannedResponse::ok(TAGS_WITH_LLAMA),
        CannedResponse::status(503, "model loading"),
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.1", server.base_url()).unwrap();

    let err = client.validate().await.unwrap_err();
    assert!(matches!(err.kind, OllamaErrorKind::ModelUnavailable(_)));
    assert!(!client.ensure_model_loaded().await);

    let err = client.generate(&request()).await.unwrap_err();
    assert!(matches!(
        ollama_kind(&err),
        OllamaErrorKind::ModelUnavailable(_)
    ));
}
