//! JSON rendering of pipeline output.

use beatreel_error::{BeatreelResult, JsonError};
use serde::Serialize;

/// Serialize a value as indented JSON.
///
/// # Errors
///
/// Returns a [`JsonError`] if the value cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> BeatreelResult<String> {
    let json = serde_json::to_string_pretty(value).map_err(JsonError::from)?;
    Ok(json)
}
