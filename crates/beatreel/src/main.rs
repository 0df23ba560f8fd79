//! Beatreel CLI binary.
//!
//! This binary provides command-line access to the generation pipeline:
//! - Plan a script into timed story beats
//! - Render and stitch a script into a video reference

use clap::Parser;
use std::process::ExitCode;

mod cli;

/// Exit status for requests rejected by validation or planning.
const REQUEST_REJECTED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, generate_reel, init_tracing, plan_beats};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json_logs);

    // Execute the requested command
    let outcome = match cli.command {
        Commands::Plan(args) => plan_beats(args),
        Commands::Generate(args) => generate_reel(args).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_request_failure() => {
            eprintln!("{}", e.user_message());
            ExitCode::from(REQUEST_REJECTED)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
