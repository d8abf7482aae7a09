//! Read-only project documents handed to the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named project documents (style guide, canon notes).
///
/// Absent documents read as empty strings.
///
/// # Examples
///
/// ```
/// use scenewright_core::ProjectContext;
///
/// let context = ProjectContext::default()
///     .with_document(ProjectContext::STYLE_GUIDE, "Frases curtas.");
///
/// assert_eq!(context.style_guide(), "Frases curtas.");
/// assert_eq!(context.world(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectContext {
    documents: BTreeMap<String, String>,
}

impl ProjectContext {
    /// Document name of the style guide.
    pub const STYLE_GUIDE: &'static str = "style_guide";
    /// Document name of the character notes.
    pub const CHARACTERS: &'static str = "characters";
    /// Document name of the world notes.
    pub const WORLD: &'static str = "world";
    /// Document name of the timeline notes.
    pub const TIMELINE: &'static str = "timeline";

    /// Builder-style insertion.
    pub fn with_document(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Insert or replace a document.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(name.into(), text.into());
    }

    /// A document's text, or `""` when absent.
    pub fn document(&self, name: &str) -> &str {
        self.documents.get(name).map(String::as_str).unwrap_or("")
    }

    /// Style guide text.
    pub fn style_guide(&self) -> &str {
        self.document(Self::STYLE_GUIDE)
    }

    /// Character notes.
    pub fn characters(&self) -> &str {
        self.document(Self::CHARACTERS)
    }

    /// World notes.
    pub fn world(&self) -> &str {
        self.document(Self::WORLD)
    }

    /// Timeline notes.
    pub fn timeline(&self) -> &str {
        self.document(Self::TIMELINE)
    }

    /// Names of every loaded document, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Number of loaded documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
