//! Error types for Ollama client.

use derive_more::{Display, Error};

// Re-export the shared OllamaErrorKind from scenewright_error
pub use scenewright_error::OllamaErrorKind;

/// Ollama error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Ollama Error: {} at {}:{}", kind, file, line)]
pub struct OllamaError {
    /// The specific error condition
    pub kind: OllamaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OllamaError {
    /// Create a new error at the caller's location.
    #[track_caller]
    pub fn new(kind: OllamaErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for Ollama operations.
pub type OllamaResult<T> = Result<T, OllamaError>;

/// Conversion from OllamaError to ScenewrightError.
impl From<OllamaError> for scenewright_error::ScenewrightError {
    fn from(err: OllamaError) -> Self {
        scenewright_error::ScenewrightError::from(scenewright_error::ModelsError::new(
            scenewright_error::ModelsErrorKind::Ollama(err.kind),
        ))
    }
}
