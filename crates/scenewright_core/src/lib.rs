//! Core data types for scenewright.
//!
//! This crate provides the values that flow through the pipeline: the brief,
//! the features extracted from it, the rendered plan, draft and final texts,
//! the read-only project context, and the generation service request/response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brief;
mod content;
mod context;
mod features;
mod plan;
mod request;

pub use brief::Brief;
pub use content::{DraftSource, FinalContent, SceneContent};
pub use context::ProjectContext;
pub use features::{ActionType, Character, FeatureSet, Mood, Setting, TimeOfDay, Weather};
pub use plan::ScenePlan;
pub use request::{
    GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError, GenerationResponse,
};
