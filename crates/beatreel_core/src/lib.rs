//! Core data types for the Beatreel pipeline.
//!
//! This crate provides the data model shared by planning, rendering and stitching:
//! the accepted [`GenerationRequest`], the planned [`StoryBeat`] sequence, per-beat
//! [`SceneRender`] records and the aggregate [`GenerationResult`], together with the
//! configuration value objects that drive them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod beat;
mod config;
mod prompt;
mod render;
mod request;
mod result;
mod stitch;

pub use beat::{EmotionalTone, StoryBeat, StoryBeatBuilder, UNSPECIFIED_LOCATION};
pub use config::{
    EndpointConfig, GenerationDefaults, PlannerConfig, ReelConfig, RenderConfig, RequestLimits,
    StitchConfig,
};
pub use prompt::{RenderClip, RenderPrompt};
pub use render::{RenderSet, RenderStatus, SceneRender};
pub use request::{GenerationDraft, GenerationRequest, RenderDirectives};
pub use result::GenerationResult;
pub use stitch::{StitchOutcome, StitchPolicy};
