//! Scripted backend implementing the generation traits.

use async_trait::async_trait;
use scenewright_core::{GenerationRequest, GenerationResponse};
use scenewright_error::{HttpError, ScenewrightResult};
use scenewright_interface::{Health, HealthStatus, TextGenerator};
use std::sync::{Arc, Mutex};

/// What the mock does when asked to generate.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text
    Reply(String),
    /// Fail with a transport error
    Fail,
}

/// Mock backend that records every request it receives.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    healthy: bool,
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

#[allow(dead_code)]
impl MockGenerator {
    /// Healthy backend replying with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            healthy: true,
            behavior: MockBehavior::Reply(text.into()),
            requests: Arc::default(),
        }
    }

    /// Healthy backend whose generate calls fail.
    pub fn failing() -> Self {
        Self {
            healthy: true,
            behavior: MockBehavior::Fail,
            requests: Arc::default(),
        }
    }

    /// Backend reporting unhealthy at connect time.
    pub fn unavailable() -> Self {
        Self {
            healthy: false,
            behavior: MockBehavior::Reply("nunca usado".to_string()),
            requests: Arc::default(),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Number of generate calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &GenerationRequest) -> ScenewrightResult<GenerationResponse> {
        self.requests.lock().expect("requests lock").push(req.clone());
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(GenerationResponse { text: text.clone() }),
            MockBehavior::Fail => Err(HttpError::new("connection refused").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl Health for MockGenerator {
    async fn health(&self) -> ScenewrightResult<HealthStatus> {
        if self.healthy {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy {
                message: "server not running".to_string(),
            })
        }
    }
}
