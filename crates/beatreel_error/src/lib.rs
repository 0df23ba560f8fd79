//! Error types for the Beatreel pipeline.
//!
//! This crate provides the foundation error types used throughout the Beatreel workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use beatreel_error::{BeatreelResult, ValidationError, ValidationErrorKind};
//!
//! fn accept(script: &str) -> BeatreelResult<()> {
//!     if script.trim().chars().count() < 20 {
//!         Err(ValidationError::new(ValidationErrorKind::ScriptTooShort {
//!             minimum: 20,
//!             actual: script.trim().chars().count(),
//!         }))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(accept("too short").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod json;
mod planning;
mod render;
mod stitch;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{BeatreelError, BeatreelErrorKind, BeatreelResult};
pub use json::JsonError;
pub use planning::{PlanningError, PlanningErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use stitch::{StitchError, StitchErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
