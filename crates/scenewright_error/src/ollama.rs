//! Generation service error conditions.

/// Ollama-specific error conditions.
///
/// The wrapper struct with location tracking lives next to the client in
/// `scenewright_models`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OllamaErrorKind {
    /// Ollama server not reachable at the specified address
    #[display("Ollama server not running at {}", _0)]
    ServerNotRunning(String),

    /// Requested model not listed by the server
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),

    /// Model is listed but could not be warmed up
    #[display("Model could not be loaded: {}", _0)]
    ModelUnavailable(String),

    /// Request exceeded its timeout
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),

    /// Server answered with a non-success status
    #[display("HTTP status {}: {}", code, body)]
    Status {
        /// Status code
        code: u16,
        /// Response body, if readable
        body: String,
    },

    /// Response body could not be decoded
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),

    /// Any other transport failure
    #[display("API error: {}", _0)]
    ApiError(String),
}
