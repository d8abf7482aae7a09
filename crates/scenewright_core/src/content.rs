//! Draft and final scene texts.

use serde::{Deserialize, Serialize};

/// Where a draft came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum DraftSource {
    /// Text returned by the generation service
    #[display("model")]
    Model,
    /// Text assembled from the fixed fragment templates
    #[display("fallback")]
    Fallback,
}

/// Draft text produced by the writer.
///
/// # Examples
///
/// ```
/// use scenewright_core::{DraftSource, SceneContent};
///
/// let draft = SceneContent::new("A chuva caía.", DraftSource::Fallback);
/// assert_eq!(draft.text(), "A chuva caía.");
/// assert_eq!(*draft.source(), DraftSource::Fallback);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SceneContent {
    /// Draft text
    #[getter(skip)]
    text: String,
    /// Origin of the draft
    source: DraftSource,
}

impl SceneContent {
    /// Create a draft.
    pub fn new(text: impl Into<String>, source: DraftSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    /// Draft text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the draft was assembled from templates.
    pub fn is_fallback(&self) -> bool {
        self.source == DraftSource::Fallback
    }
}

/// Edited scene; the externally visible artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct FinalContent(String);

impl FinalContent {
    /// Wrap edited text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The edited text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}
