//! Scene drafting through a generation backend, with a fixed-fragment fallback.

use crate::{analyze, compose_fallback};
use scenewright_config::GenerationConfig;
use scenewright_core::{
    Brief, DraftSource, GenerationRequest, GenerationRequestBuilderError, ProjectContext,
    SceneContent, ScenePlan,
};
use scenewright_interface::{Health, HealthStatus};
use tracing::{debug, info, instrument, warn};

const PREAMBLE: &str = "Você é um escritor profissional especializado em narrativa literária. Sua tarefa é escrever uma cena baseada no brief e plano fornecidos.";

const INSTRUCTIONS: &str = "INSTRUÇÕES:
- Escreva uma cena narrativa completa e envolvente
- Use terceira pessoa onisciente
- Inclua descrições sensoriais detalhadas
- Desenvolva diálogos naturais e significativos
- Mantenha consistência com o estilo e personagens
- A cena deve ter entre 300-600 palavras
- Use linguagem literária em português brasileiro";

/// Build the drafting prompt from the brief, plan and project documents.
///
/// Blank project documents are left out of the prompt.
pub fn build_prompt(brief: &Brief, plan: &ScenePlan, context: &ProjectContext) -> String {
    let documents: Vec<String> = [
        ("GUIA DE ESTILO", context.style_guide()),
        ("PERSONAGENS", context.characters()),
        ("MUNDO/CENÁRIO", context.world()),
    ]
    .iter()
    .filter(|(_, text)| !text.trim().is_empty())
    .map(|(title, text)| format!("{}:\n{}", title, text))
    .collect();

    let mut sections = vec![PREAMBLE.to_string()];
    if !documents.is_empty() {
        sections.push(documents.join("\n\n"));
    }
    sections.push(format!("BRIEF DA CENA:\n{}", brief));
    sections.push(format!("PLANO ESTRUTURAL:\n{}", plan));
    sections.push(INSTRUCTIONS.to_string());
    sections.push("CENA:".to_string());

    sections.join("\n\n")
}

/// Drafts scenes with a generation backend when one is reachable.
///
/// Availability is checked once in [`Writer::connect`]. A writer that starts
/// without a reachable backend stays in fallback mode for its whole lifetime.
#[derive(Debug)]
pub struct Writer<G> {
    generator: Option<G>,
    settings: GenerationConfig,
}

impl<G: Health> Writer<G> {
    /// Probe the backend and keep it only if it reports healthy.
    #[instrument(
        skip_all,
        fields(provider = generator.provider_name(), model = generator.model_name())
    )]
    pub async fn connect(generator: G, settings: GenerationConfig) -> Self {
        let generator = match generator.health().await {
            Ok(HealthStatus::Healthy) => {
                info!("Generation backend available");
                Some(generator)
            }
            Ok(HealthStatus::Unhealthy { message }) => {
                warn!(%message, "Generation backend unavailable, using fallback scenes");
                None
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "Generation backend health check failed, using fallback scenes"
                );
                None
            }
        };

        Self {
            generator,
            settings,
        }
    }

    /// A writer that only assembles fallback scenes.
    pub fn fallback_only(settings: GenerationConfig) -> Self {
        Self {
            generator: None,
            settings,
        }
    }

    /// True when no backend is in use.
    pub fn is_fallback(&self) -> bool {
        self.generator.is_none()
    }

    /// Draft a scene.
    ///
    /// Backend failures and short responses fall back to the fixed fragments;
    /// the backend is never retried within a call.
    #[instrument(
        skip_all,
        fields(brief_length = brief.as_str().len(), fallback = self.is_fallback())
    )]
    pub async fn write(
        &self,
        brief: &Brief,
        plan: &ScenePlan,
        context: &ProjectContext,
    ) -> SceneContent {
        let Some(generator) = &self.generator else {
            return Self::fallback(brief);
        };

        let request = match self.request(build_prompt(brief, plan, context)) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Could not build generation request, using fallback scene");
                return Self::fallback(brief);
            }
        };

        match generator.generate(&request).await {
            Ok(response) => {
                let text = response.text.trim();
                let length = text.chars().count();
                if text.is_empty() || length < self.settings.min_length {
                    warn!(
                        length,
                        min_length = self.settings.min_length,
                        "Generated draft too short, using fallback scene"
                    );
                    Self::fallback(brief)
                } else {
                    info!(length, "Generated draft");
                    SceneContent::new(text, DraftSource::Model)
                }
            }
            Err(e) => {
                warn!(error = %e, "Generation failed, using fallback scene");
                Self::fallback(brief)
            }
        }
    }

    fn request(&self, prompt: String) -> Result<GenerationRequest, GenerationRequestBuilderError> {
        GenerationRequest::builder()
            .prompt(prompt)
            .max_output_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .top_p(self.settings.top_p)
            .top_k(self.settings.top_k)
            .build()
    }

    fn fallback(brief: &Brief) -> SceneContent {
        let features = analyze(brief);
        debug!(?features, "Composing fallback scene");
        SceneContent::new(compose_fallback(&features), DraftSource::Fallback)
    }
}
