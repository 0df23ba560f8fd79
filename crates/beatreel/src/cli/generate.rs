//! Generation command handler.

use super::commands::GenerateArgs;
use super::plan::load_inputs;
use beatreel::{
    BeatreelResult, CapabilityDrivers, EndpointConfig, GenerationDraft, GenerationPipeline,
    placeholder_drivers, to_pretty_json,
};
use tracing::{info, warn};

/// Run the full pipeline and print the result.
pub async fn generate_reel(args: GenerateArgs) -> BeatreelResult<()> {
    let (config, draft) = load_inputs(&args.script)?;
    let draft = GenerationDraft {
        visual_style: args.visual_style,
        music_style: args.music_style,
        voice_profile: args.voice_profile,
        auto_refine: args.no_auto_refine.then_some(false),
        ..draft
    };

    let drivers = if args.dry_run {
        info!("Dry run: using placeholder drivers");
        placeholder_drivers()
    } else {
        service_drivers(&config.endpoints)
    };
    let pipeline = GenerationPipeline::new(config, drivers.render, drivers.stitch)?;

    let result = pipeline.generate(draft).await?;
    if result.combined_video_url().is_none() {
        warn!(outcome = ?result.stitch(), "No combined video produced");
    }
    println!("{}", to_pretty_json(&result)?);
    Ok(())
}

#[cfg(feature = "http")]
fn service_drivers(endpoints: &EndpointConfig) -> CapabilityDrivers {
    beatreel::http_drivers(endpoints)
}

#[cfg(not(feature = "http"))]
fn service_drivers(_endpoints: &EndpointConfig) -> CapabilityDrivers {
    warn!("Built without the http feature; falling back to placeholder drivers");
    placeholder_drivers()
}
