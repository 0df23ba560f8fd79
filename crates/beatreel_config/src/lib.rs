//! Configuration loading for Beatreel.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from beatreel.toml)
//! - User overrides (~/.config/beatreel/beatreel.toml, then ./beatreel.toml)
//! - Environment overrides (`BEATREEL__RENDER__MAX_CONCURRENT=4`)
//!
//! Later sources take precedence. The result is validated before it is returned.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;

pub use loader::{BUNDLED_CONFIG, from_file, load, load_with_override};
