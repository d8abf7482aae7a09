//! Rendered scene outline.

use serde::{Deserialize, Serialize};

/// Formatted outline derived from a brief.
///
/// Produced fresh on every planning call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct ScenePlan(String);

impl ScenePlan {
    /// Wrap rendered outline text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The outline text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
