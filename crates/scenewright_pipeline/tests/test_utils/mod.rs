//! Test utilities for pipeline tests.
//!
//! This module provides a scripted generation backend.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockGenerator};

use scenewright_config::GenerationConfig;

/// Default generation settings used by the tests.
#[allow(dead_code)]
pub fn test_settings() -> GenerationConfig {
    GenerationConfig::default()
}
