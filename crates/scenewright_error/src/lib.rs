//! Error types for scenewright.
//!
//! This crate provides the error types shared by every scenewright crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scenewright_error::{ConfigError, ScenewrightResult};
//!
//! fn load() -> ScenewrightResult<String> {
//!     Err(ConfigError::new("missing [provider] section"))?
//! }
//!
//! match load() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod models;
mod ollama;
mod pipeline;
mod storage;

pub use config::ConfigError;
pub use error::{ScenewrightError, ScenewrightErrorKind, ScenewrightResult};
pub use http::HttpError;
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind};
pub use ollama::OllamaErrorKind;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use storage::{StorageError, StorageErrorKind};
