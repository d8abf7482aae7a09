//! Configuration for scenewright.
//!
//! Values are layered from bundled defaults, user files and the environment.
//! See [`ScenewrightConfig::load`] for the precedence rules.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    GenerationConfig, ProbeConfig, ProjectConfig, ProviderConfig, ScenewrightConfig,
};
