//! Supporting types for the backend traits.

use serde::{Deserialize, Serialize};

/// Health status of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum HealthStatus {
    /// Backend is fully operational
    #[display("healthy")]
    Healthy,
    /// Backend is not operational
    #[display("unhealthy: {}", message)]
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}

impl HealthStatus {
    /// True for [`HealthStatus::Healthy`].
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// A model installed on a local backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalModel {
    /// Model tag (e.g., "llama3.1:8b")
    pub name: String,
    /// Size on disk in bytes
    #[serde(default)]
    pub size: u64,
}

impl LocalModel {
    /// Size on disk in mebibytes.
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}
