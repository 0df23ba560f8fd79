//! Scene rendering, stitching and the end-to-end generation pipeline.
//!
//! - [`SceneRenderer`] renders one beat and folds every failure into the
//!   beat's [`SceneRender`](beatreel_core::SceneRender).
//! - [`RenderOrchestrator`] fans renders out concurrently and waits for all.
//! - [`Stitcher`] combines completed clips in beat order under a
//!   [`StitchPolicy`](beatreel_core::StitchPolicy).
//! - [`GenerationPipeline`] ties acceptance, planning, rendering and stitching
//!   together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod pipeline;
mod scene;
mod stitcher;

pub use orchestrator::RenderOrchestrator;
pub use pipeline::GenerationPipeline;
pub use scene::SceneRenderer;
pub use stitcher::Stitcher;
