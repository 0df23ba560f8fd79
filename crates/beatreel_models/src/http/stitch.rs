//! HTTP client for the stitch service.

use super::{StitchRequest, StitchResponse, endpoint, token_from_env};
use async_trait::async_trait;
use beatreel_core::EndpointConfig;
use beatreel_error::{StitchError, StitchErrorKind};
use beatreel_interface::StitchDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Stitch service client.
///
/// Sends `{"clips": [...]}` to `POST {base}/stitch` and expects
/// `{"videoUrl": "..."}` back.
#[derive(Debug, Clone)]
pub struct HttpStitchClient {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpStitchClient {
    /// Create a client for a base URL with an optional bearer token.
    pub fn new(base_url: impl AsRef<str>, token: Option<String>) -> Self {
        let url = endpoint(base_url.as_ref(), "stitch");
        debug!(url = %url, "Creating stitch client");
        Self {
            client: Client::new(),
            url,
            token,
        }
    }

    /// Create a client from endpoint settings, reading the token from the environment.
    pub fn from_config(endpoints: &EndpointConfig) -> Self {
        Self::new(&endpoints.stitch_url, token_from_env(endpoints))
    }

    /// Full URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StitchDriver for HttpStitchClient {
    #[instrument(skip(self, clips), fields(clips = clips.len()))]
    async fn stitch(&self, clips: &[String]) -> Result<String, StitchError> {
        if clips.is_empty() {
            return Err(StitchError::new(StitchErrorKind::NoSegments));
        }
        debug!("Sending stitch request");

        let mut request = self.client.post(&self.url).json(&StitchRequest::new(clips));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "Failed to send stitch request");
            StitchError::new(StitchErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Stitch service returned error");
            return Err(StitchError::new(StitchErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let body: StitchResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse stitch response");
            StitchError::new(StitchErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        match body.video_url().as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                debug!(url, "Received combined video");
                Ok(url.to_string())
            }
            _ => {
                error!("Stitch response carries no videoUrl");
                Err(StitchError::new(StitchErrorKind::MalformedResponse(
                    "missing videoUrl".to_string(),
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}
