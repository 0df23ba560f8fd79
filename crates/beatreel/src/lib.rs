//! Beatreel - script-to-video generation pipeline
//!
//! Beatreel turns a prose script into a short narrative video. A script is
//! segmented into scene units, planned into timed story beats, each beat is
//! rendered concurrently by an external rendering capability, and the
//! completed segments are stitched, in beat order, into one video reference.
//!
//! # Quick Start
//!
//! ```no_run
//! use beatreel::{GenerationDraft, GenerationPipeline, placeholder_drivers};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = beatreel::load_config()?;
//!     let drivers = placeholder_drivers();
//!     let pipeline = GenerationPipeline::new(config, drivers.render, drivers.stitch)?;
//!
//!     let result = pipeline
//!         .generate(GenerationDraft::from_script(
//!             "Fade in: the city wakes under a copper sky.",
//!         ))
//!         .await?;
//!     println!("{}", beatreel::to_pretty_json(&result)?);
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `http` - JSON-over-HTTP render and stitch clients (default)
//!
//! # Architecture
//!
//! - `beatreel_error` - Error types
//! - `beatreel_core` - Data model and configuration value objects
//! - `beatreel_interface` - Capability traits
//! - `beatreel_config` - Layered TOML configuration
//! - `beatreel_planner` - Segmentation and beat planning
//! - `beatreel_render` - Concurrent rendering, stitching and the pipeline
//! - `beatreel_models` - Render and stitch capability clients
//!
//! This crate (`beatreel`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod output;
mod script;

pub use output::to_pretty_json;
pub use script::{STDIN_MARKER, ScriptSource};

pub use beatreel_core::*;
pub use beatreel_error::*;
pub use beatreel_interface::*;

pub use beatreel_config::{
    BUNDLED_CONFIG, from_file as config_from_file, load as load_config,
    load_with_override as load_config_with_override,
};
pub use beatreel_models::*;
pub use beatreel_planner::*;
pub use beatreel_render::*;
