//! The caller-supplied scene request.

use serde::{Deserialize, Serialize};

/// Free-text scene request; the unit of input to the whole pipeline.
///
/// # Examples
///
/// ```
/// use scenewright_core::Brief;
///
/// let brief = Brief::from("Escreva um encontro tenso no MASP.");
/// assert!(brief.lowercase().contains("masp"));
/// assert!(!brief.is_blank());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct Brief(String);

impl Brief {
    /// Wrap a brief text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The literal brief text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased copy used for keyword matching.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// True when the brief holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Brief {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Brief {
    fn from(text: String) -> Self {
        Self(text)
    }
}
