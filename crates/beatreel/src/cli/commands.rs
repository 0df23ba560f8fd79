//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Beatreel - turn prose scripts into timed story beats and stitched video
#[derive(Parser, Debug)]
#[command(name = "beatreel")]
#[command(about = "Turn prose scripts into timed story beats and stitched video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Segment a script and print the planned beats as JSON
    Plan(PlanArgs),

    /// Plan, render and stitch a script, then print the result as JSON
    Generate(GenerateArgs),
}

/// Arguments shared by every command that reads a script
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Path to the script file, or `-` for standard input
    #[arg(long)]
    pub script: PathBuf,

    /// Target runtime in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Configuration file layered over the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `beatreel plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub script: ScriptArgs,
}

/// Arguments for `beatreel generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub script: ScriptArgs,

    /// Visual style directive
    #[arg(long)]
    pub visual_style: Option<String>,

    /// Music style directive
    #[arg(long)]
    pub music_style: Option<String>,

    /// Voice profile identifier
    #[arg(long)]
    pub voice_profile: Option<String>,

    /// Forbid the render service from refining prompts on its own
    #[arg(long)]
    pub no_auto_refine: bool,

    /// Use placeholder drivers instead of the configured services
    #[arg(long)]
    pub dry_run: bool,
}
