//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, ModelsError, PipelineError, StorageError};

/// Every error condition a scenewright operation can surface.
///
/// # Examples
///
/// ```
/// use scenewright_error::{ScenewrightError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScenewrightError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenewrightErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Project data or output storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Generation service error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Pipeline entry point error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Scenewright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenewright_error::{ConfigError, ScenewrightResult};
///
/// fn might_fail() -> ScenewrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenewright Error: {}", _0)]
pub struct ScenewrightError(Box<ScenewrightErrorKind>);

impl ScenewrightError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenewrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenewrightErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScenewrightErrorKind
impl<T> From<T> for ScenewrightError
where
    T: Into<ScenewrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scenewright operations.
pub type ScenewrightResult<T> = std::result::Result<T, ScenewrightError>;
