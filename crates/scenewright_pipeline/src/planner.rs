//! Scene outline rendering.

use crate::analyze;
use scenewright_core::{ActionType, Brief, FeatureSet, Mood, ScenePlan, Setting, Weather};
use tracing::{debug, instrument};

/// Narrative progression outline, one of four fixed six-step templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Progression {
    /// Tense mood in the rain
    #[display("tense+rain")]
    TenseRain,
    /// Emotional mood
    #[display("emotional")]
    Emotional,
    /// Action mood
    #[display("action")]
    Action,
    /// Anything else
    #[display("generic")]
    Generic,
}

impl Progression {
    /// Select the outline for a feature set. Always returns exactly one template.
    pub fn select(features: &FeatureSet) -> Self {
        match (features.mood, features.weather) {
            (Some(Mood::Tense), Some(Weather::Rain)) => Progression::TenseRain,
            (Some(Mood::Emotional), _) => Progression::Emotional,
            (Some(Mood::Action), _) => Progression::Action,
            _ => Progression::Generic,
        }
    }

    /// The six numbered steps of the outline.
    pub fn steps(self) -> [&'static str; 6] {
        match self {
            Progression::TenseRain => [
                "**Abertura atmosférica**: Estabelecer ambiente tenso com chuva",
                "**Chegada dos personagens**: Entrada gradual, criando expectativa",
                "**Confronto inicial**: Primeiras palavras carregadas de tensão",
                "**Escalada da tensão**: Revelações e posicionamentos",
                "**Clímax do encontro**: Momento de maior intensidade",
                "**Resolução/gancho**: Desfecho que mantém suspense",
            ],
            Progression::Emotional => [
                "**Ambientação emotiva**: Estabelecer cenário íntimo",
                "**Encontro dos personagens**: Aproximação gradual",
                "**Abertura emocional**: Primeiras palavras sinceras",
                "**Desenvolvimento**: Aprofundamento da conversa",
                "**Clímax emocional**: Momento de maior vulnerabilidade",
                "**Resolução**: Conexão ou separação definitiva",
            ],
            Progression::Action => [
                "**Setup dinâmico**: Estabelecer ambiente de movimento",
                "**Incidente inicial**: Evento que desencadeia a ação",
                "**Escalada**: Intensificação da situação",
                "**Complicações**: Obstáculos e desafios",
                "**Clímax de ação**: Momento de maior intensidade",
                "**Resolução**: Consequências e desfecho",
            ],
            Progression::Generic => [
                "**Abertura**: Estabelecer cenário e atmosfera",
                "**Desenvolvimento**: Introdução dos personagens",
                "**Conflito**: Tensão ou situação central",
                "**Desenvolvimento**: Aprofundamento da situação",
                "**Clímax**: Momento decisivo",
                "**Resolução**: Desfecho da cena",
            ],
        }
    }
}

/// Pacing and device guidance for the technical notes block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Pacing {
    /// Slow, tension-building
    #[display("deliberate")]
    Deliberate,
    /// Fast and dynamic
    #[display("dynamic")]
    Dynamic,
    /// Reflective
    #[display("reflective")]
    Reflective,
    /// Balanced default
    #[display("balanced")]
    Balanced,
}

impl Pacing {
    /// Select the pacing for a mood.
    pub fn select(mood: Option<Mood>) -> Self {
        match mood {
            Some(Mood::Tense) => Pacing::Deliberate,
            Some(Mood::Action) => Pacing::Dynamic,
            Some(Mood::Emotional) => Pacing::Reflective,
            Some(Mood::Suspense) | None => Pacing::Balanced,
        }
    }

    /// `(rhythm, devices)` lines.
    pub fn notes(self) -> (&'static str, &'static str) {
        match self {
            Pacing::Deliberate => (
                "Lento e deliberado, construindo tensão",
                "Descrição sensorial, silêncios significativos",
            ),
            Pacing::Dynamic => ("Rápido e dinâmico", "Frases curtas, verbos de ação"),
            Pacing::Reflective => ("Pausado e reflexivo", "Introspecção, detalhes emotivos"),
            Pacing::Balanced => ("Equilibrado", "Descrição equilibrada"),
        }
    }
}

fn setting_label(setting: Setting) -> &'static str {
    match setting {
        Setting::Masp => "MASP - Museu de Arte de São Paulo",
        Setting::Library => "Biblioteca antiga",
        Setting::Cafe => "Café em São Paulo",
        Setting::Subway => "Estação de metrô",
    }
}

fn action_label(action: ActionType) -> String {
    match action {
        ActionType::Encounter => "encontro/confronto".to_string(),
        other => other.to_string(),
    }
}

fn or_placeholder<T: ToString>(value: Option<T>, placeholder: &str) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Renders the structured outline of a scene.
///
/// Planning is a pure function of the brief text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner;

impl Planner {
    /// Create a planner.
    pub fn new() -> Self {
        Self
    }

    /// Analyze the brief and render its outline.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenewright_core::Brief;
    /// use scenewright_pipeline::Planner;
    ///
    /// let plan = Planner::new().plan(&Brief::from(""));
    /// assert!(plan.as_str().contains("- **Local**: Local a definir"));
    /// assert!(plan.as_str().contains("- Personagens a definir"));
    /// ```
    #[instrument(skip(self, brief), fields(brief_length = brief.as_str().len()))]
    pub fn plan(&self, brief: &Brief) -> ScenePlan {
        let features = analyze(brief);
        self.render(brief, &features)
    }

    /// Render the outline for already-extracted features.
    pub fn render(&self, brief: &Brief, features: &FeatureSet) -> ScenePlan {
        let progression = Progression::select(features);
        let pacing = Pacing::select(features.mood);
        debug!(%progression, %pacing, "Selected plan templates");

        let mut parts: Vec<String> = vec![
            "## ESTRUTURA DA CENA".to_string(),
            format!("\n**Brief Original:** {}", brief),
            "\n### 1. AMBIENTAÇÃO".to_string(),
            format!(
                "- **Local**: {}",
                or_placeholder(features.setting.map(setting_label), "Local a definir")
            ),
            format!(
                "- **Período**: {}",
                or_placeholder(features.time_of_day, "Período a definir")
            ),
            format!("- **Clima**: {}", or_placeholder(features.weather, "Clima neutro")),
            format!(
                "- **Atmosfera**: {}",
                or_placeholder(features.mood, "Atmosfera neutra")
            ),
            format!(
                "- **Movimento**: {}",
                or_placeholder(features.action_type.map(action_label), "Movimento a definir")
            ),
            "\n### 2. PERSONAGENS".to_string(),
        ];

        if features.characters.is_empty() {
            parts.push("- Personagens a definir".to_string());
        } else {
            parts.extend(features.characters.iter().map(|c| format!("- {}", c)));
        }

        parts.push("\n### 3. PROGRESSÃO NARRATIVA".to_string());
        parts.extend(
            progression
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step)),
        );

        let (rhythm, devices) = pacing.notes();
        parts.push("\n### 4. ELEMENTOS TÉCNICOS".to_string());
        parts.push("- **Foco narrativo**: Terceira pessoa onisciente".to_string());
        parts.push(format!("- **Ritmo**: {}", rhythm));
        parts.push(format!("- **Recursos**: {}", devices));
        parts.push("- **Diálogos**: Naturais e adequados ao tom da cena".to_string());

        ScenePlan::new(parts.join("\n"))
    }
}
