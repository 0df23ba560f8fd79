//! HTTP client for the render service.

use super::{RenderResponse, endpoint, token_from_env};
use async_trait::async_trait;
use beatreel_core::{EndpointConfig, RenderClip, RenderPrompt};
use beatreel_error::{RenderError, RenderErrorKind};
use beatreel_interface::RenderDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Render service client.
///
/// Sends each [`RenderPrompt`] as JSON to `POST {base}/render` and expects
/// `{"videoUrl": "...", "jobId": "..."}` back. One request per call; retries
/// are left to the service.
#[derive(Debug, Clone)]
pub struct HttpRenderClient {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpRenderClient {
    /// Create a client for a base URL with an optional bearer token.
    pub fn new(base_url: impl AsRef<str>, token: Option<String>) -> Self {
        let url = endpoint(base_url.as_ref(), "render");
        debug!(url = %url, "Creating render client");
        Self {
            client: Client::new(),
            url,
            token,
        }
    }

    /// Create a client from endpoint settings, reading the token from the environment.
    pub fn from_config(endpoints: &EndpointConfig) -> Self {
        Self::new(&endpoints.render_url, token_from_env(endpoints))
    }

    /// Full URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RenderDriver for HttpRenderClient {
    #[instrument(skip(self, prompt), fields(beat_id = %prompt.beat_id()))]
    async fn render(&self, prompt: &RenderPrompt) -> Result<RenderClip, RenderError> {
        debug!("Sending render request");

        let mut request = self.client.post(&self.url).json(prompt);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "Failed to send render request");
            RenderError::new(RenderErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Render service returned error");
            return Err(RenderError::new(RenderErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let body: RenderResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse render response");
            RenderError::new(RenderErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let video_url = body
            .video_url()
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                error!("Render response carries no videoUrl");
                RenderError::new(RenderErrorKind::MalformedResponse(
                    "missing videoUrl".to_string(),
                ))
            })?;

        debug!(video_url, job_id = ?body.job_id(), "Received rendered clip");
        Ok(RenderClip::new(video_url, body.job_id().clone()))
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}
