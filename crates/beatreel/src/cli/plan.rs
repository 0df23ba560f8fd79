//! Beat planning command handler.

use super::commands::{PlanArgs, ScriptArgs};
use beatreel::{
    BeatreelResult, GenerationDraft, GenerationPipeline, ReelConfig, ScriptSource,
    load_config_with_override, placeholder_drivers, to_pretty_json,
};
use tracing::info;

/// Load configuration and the script named on the command line.
pub(super) fn load_inputs(args: &ScriptArgs) -> BeatreelResult<(ReelConfig, GenerationDraft)> {
    let config = load_config_with_override(args.config.as_deref())?;
    let script = ScriptSource::from_arg(&args.script).read()?;
    let draft = GenerationDraft {
        target_duration: args.duration,
        ..GenerationDraft::from_script(script)
    };
    Ok((config, draft))
}

/// Plan a script and print the beats.
pub fn plan_beats(args: PlanArgs) -> BeatreelResult<()> {
    let (config, draft) = load_inputs(&args.script)?;

    // Planning never reaches a capability.
    let drivers = placeholder_drivers();
    let pipeline = GenerationPipeline::new(config, drivers.render, drivers.stitch)?;

    let beats = pipeline.plan_only(draft)?;
    info!(beats = beats.len(), "Plan ready");
    println!("{}", to_pretty_json(&beats)?);
    Ok(())
}
