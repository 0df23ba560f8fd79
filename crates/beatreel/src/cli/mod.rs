//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the beatreel binary.

mod commands;
mod generate;
mod logging;
mod plan;

pub use commands::{Cli, Commands};
pub use generate::generate_reel;
pub use logging::init_tracing;
pub use plan::plan_beats;
