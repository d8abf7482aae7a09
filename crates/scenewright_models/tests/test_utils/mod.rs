//! Test utilities for Ollama client tests.
//!
//! This module provides a local HTTP server answering with canned responses.

pub mod fake_ollama;

#[allow(unused_imports)]
pub use fake_ollama::{CannedResponse, FakeOllama};
