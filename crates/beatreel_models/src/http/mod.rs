//! JSON-over-HTTP capability clients.

mod dto;
mod render;
mod stitch;

pub use dto::{RenderResponse, StitchRequest, StitchResponse};
pub use render::HttpRenderClient;
pub use stitch::HttpStitchClient;

use beatreel_core::EndpointConfig;
use tracing::debug;

/// Join a base URL and a path segment.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Bearer token from the configured environment variable, if set and non-empty.
fn token_from_env(endpoints: &EndpointConfig) -> Option<String> {
    let var = endpoints.api_key_env.as_deref()?;
    match std::env::var(var) {
        Ok(token) if !token.trim().is_empty() => Some(token),
        _ => {
            debug!(var, "No API key in environment");
            None
        }
    }
}
