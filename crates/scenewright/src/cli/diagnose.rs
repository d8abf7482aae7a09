//! Ollama diagnostics command handler.

use scenewright::{
    GenerationRequest, Health, HealthStatus, LocalModel, ModelCatalog, ModelsError,
    ModelsErrorKind, OllamaClient, ScenewrightConfig, ScenewrightResult, TextGenerator,
};
use std::time::{Duration, Instant};
use tracing::instrument;

const TEST_PROMPT: &str = "Escreva uma frase simples sobre o tempo.";
const TEST_MAX_TOKENS: u32 = 50;
const TEST_TEMPERATURE: f32 = 0.7;

/// Check the server, the installed models and a short test generation.
///
/// Failed checks are reported on stdout with troubleshooting hints; only
/// client construction errors are returned.
#[instrument(skip(config), fields(model = %config.provider.model))]
pub async fn run_diagnostics(config: &ScenewrightConfig) -> ScenewrightResult<()> {
    let client = OllamaClient::from_config(config)?;
    let model = &config.provider.model;

    println!("Ollama Diagnostics:");
    println!("===================");

    // 1. Server
    match client.health().await? {
        HealthStatus::Healthy => println!("[ok]   Server reachable at {}", client.base_url()),
        HealthStatus::Unhealthy { message } => {
            println!("[fail] Server not reachable at {}: {}", client.base_url(), message);
            print_hints(config, &["Start the server with: ollama serve"]);
            return Ok(());
        }
    }

    // 2. Models
    let models = match client.list_models().await {
        Ok(models) => models,
        Err(e) => {
            println!("[fail] Could not list models: {}", e);
            print_hints(config, &["Check that the server version supports /api/tags"]);
            return Ok(());
        }
    };
    print_models(&models);

    // 3. Configured model
    if models.iter().any(|m| m.name.contains(model.as_str())) {
        println!("[ok]   Configured model '{}' is installed", model);
    } else {
        println!("[fail] Configured model '{}' is not installed", model);
        let pull = format!("Install it with: ollama pull {}", model);
        print_hints(config, &[pull.as_str()]);
        return Ok(());
    }

    // 4. Test generation
    let request = GenerationRequest::builder()
        .prompt(TEST_PROMPT)
        .max_output_tokens(TEST_MAX_TOKENS)
        .temperature(TEST_TEMPERATURE)
        .top_p(config.generation.top_p)
        .top_k(config.generation.top_k)
        .build()
        .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

    let started = Instant::now();
    match client.generate(&request).await {
        Ok(response) => {
            println!("[ok]   {}", elapsed_summary("finished in", started.elapsed()));
            println!("       Response: {}", response.text);
        }
        Err(e) => {
            println!(
                "[fail] {}: {}",
                elapsed_summary("failed after", started.elapsed()),
                e
            );
            print_hints(
                config,
                &[
                    "The model may still be loading; try again in a minute",
                    "Increase [generation] timeout_secs for slow machines",
                ],
            );
            return Ok(());
        }
    }

    println!("\nAll checks passed.");
    Ok(())
}

/// Test generation timing; `generate` validates and warms the model up first.
fn elapsed_summary(outcome: &str, elapsed: Duration) -> String {
    format!(
        "Test generation {} {:.2}s (includes model check and warm-up)",
        outcome,
        elapsed.as_secs_f64()
    )
}

fn print_models(models: &[LocalModel]) {
    if models.is_empty() {
        println!("[warn] No models installed");
        return;
    }

    println!("[ok]   {} model(s) installed:", models.len());
    for model in models {
        println!("       - {} ({:.1} MB)", model.name, model.size_mb());
    }
}

fn print_hints(config: &ScenewrightConfig, hints: &[&str]) {
    println!("\nTroubleshooting:");
    for hint in hints {
        println!("  - {}", hint);
    }
    println!(
        "  - Check [provider] base_url (currently {})",
        config.provider.base_url
    );
    println!("  - Scenes are still generated from fallback templates while Ollama is unavailable");
}
