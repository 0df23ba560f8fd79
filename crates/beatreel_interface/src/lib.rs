//! Trait definitions for the Beatreel pipeline.
//!
//! This crate defines the seams between the core and its collaborators: the
//! external rendering and stitching capabilities, and the pluggable text
//! classification steps used while planning beats.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod traits;

pub use classify::{LocationExtractor, ToneClassifier};
pub use traits::{RenderDriver, StitchDriver};
