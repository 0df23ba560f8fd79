//! Layered configuration sources.

use beatreel_core::ReelConfig;
use beatreel_error::{BeatreelError, BeatreelResult, ConfigError};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
pub const BUNDLED_CONFIG: &str = include_str!("../../../beatreel.toml");

/// Load configuration from a single file, on top of nothing but type defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn from_file(path: impl AsRef<Path>) -> BeatreelResult<ReelConfig> {
    debug!("Loading configuration from file");

    let builder = Config::builder().add_source(File::from(path.as_ref()));
    finish(builder, &format!("{}", path.as_ref().display()))
}

/// Load configuration with precedence: environment > current dir > home dir > bundled.
///
/// User config files are optional and silently skipped if not found.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = beatreel_config::load()?;
/// println!("Render concurrency: {}", config.render.max_concurrent);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if any present source is malformed or the merged result is invalid.
#[instrument]
pub fn load() -> BeatreelResult<ReelConfig> {
    load_with_override(None::<&Path>)
}

/// Like [`load`], with an extra file layered just below the environment.
///
/// # Errors
///
/// Returns an error if the override file is missing or any source is malformed.
#[instrument(skip(path))]
pub fn load_with_override(path: Option<impl AsRef<Path>>) -> BeatreelResult<ReelConfig> {
    debug!("Loading configuration with precedence: env > override > current dir > home dir > bundled");

    let mut builder =
        Config::builder().add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml));

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config/beatreel/beatreel.toml");
        builder = builder.add_source(File::from(home_config).required(false));
    }

    builder = builder.add_source(File::with_name("beatreel").required(false));

    if let Some(path) = path.as_ref() {
        debug!(path = %path.as_ref().display(), "Adding override file");
        builder = builder.add_source(File::from(path.as_ref()));
    }

    builder = builder.add_source(
        Environment::with_prefix("BEATREEL")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    finish(builder, "layered sources")
}

fn finish(builder: ConfigBuilder<DefaultState>, origin: &str) -> BeatreelResult<ReelConfig> {
    let config: ReelConfig = builder
        .build()
        .map_err(|e| {
            BeatreelError::from(
                ConfigError::new(format!("Failed to read configuration: {}", e))
                    .with_origin(origin),
            )
        })?
        .try_deserialize()
        .map_err(|e| {
            BeatreelError::from(
                ConfigError::new(format!("Failed to parse configuration: {}", e))
                    .with_origin(origin),
            )
        })?;

    config.validate().map_err(|e| e.with_origin(origin))?;
    debug!(
        policy = %config.stitch.policy,
        max_concurrent = config.render.max_concurrent,
        "Configuration loaded"
    );
    Ok(config)
}
