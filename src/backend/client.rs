//! HTTP implementation of both backend services.

use super::http_client::build_backend_client;
use super::scrub::{error_message_from_body, sanitize_backend_error};
use super::traits::{PostGenerationService, StyleAnalysisService};
use super::wire::{AnalyzeStyleEnvelope, AnalyzeStyleRequest, PingResponse};
use crate::composer::model::{DraftRequest, GeneratedPost, StyleProfile};
use crate::config::ApiConfig;
use crate::error::{ConfigError, RequestFailure};
use async_trait::async_trait;
use reqwest::{Client, Response, multipart};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

const ANALYZE_ENDPOINT: &str = "analyze-style";
const GENERATE_ENDPOINT: &str = "generate-post";
const PING_ENDPOINT: &str = "ping";
const PING_TIMEOUT_SECS: u64 = 10;

/// Talks to a StyleMind backend rooted at `api.base_url`.
pub struct BackendClient {
    base_url: String,
    /// Pre-computed endpoint URLs (avoids `format!` per request).
    analyze_url: String,
    generate_url: String,
    ping_url: String,
    analyze_timeout: Duration,
    generate_timeout: Duration,
    client: Client,
}

impl BackendClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ConfigError::Validation(format!("api.base_url {base_url:?}: {e}")))?;
        let ping_url = parsed
            .join("/")
            .map_err(|e| ConfigError::Validation(format!("api.base_url {base_url:?}: {e}")))?
            .to_string();

        Ok(Self {
            analyze_url: format!("{base_url}/{ANALYZE_ENDPOINT}"),
            generate_url: format!("{base_url}/{GENERATE_ENDPOINT}"),
            ping_url,
            base_url,
            analyze_timeout: Duration::from_secs(config.analyze_timeout_secs),
            generate_timeout: Duration::from_secs(config.generate_timeout_secs),
            client: build_backend_client(config.connect_timeout_secs),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Hit the backend's root route and return its greeting.
    pub async fn ping(&self) -> Result<String, RequestFailure> {
        let timeout = Duration::from_secs(PING_TIMEOUT_SECS);
        let response = self
            .client
            .get(&self.ping_url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| send_failure(PING_ENDPOINT, &e, timeout))?;
        let response = ensure_success(PING_ENDPOINT, response).await?;
        let body: PingResponse = decode_json(PING_ENDPOINT, response, timeout).await?;
        Ok(body.message.unwrap_or_else(|| "ok".into()))
    }
}

#[async_trait]
impl StyleAnalysisService for BackendClient {
    async fn analyze_style(&self, urls: &[String]) -> Result<StyleProfile, RequestFailure> {
        debug!(count = urls.len(), url = %self.analyze_url, "posting analyze-style");
        let response = self
            .client
            .post(&self.analyze_url)
            .timeout(self.analyze_timeout)
            .json(&AnalyzeStyleRequest { urls })
            .send()
            .await
            .map_err(|e| send_failure(ANALYZE_ENDPOINT, &e, self.analyze_timeout))?;
        let response = ensure_success(ANALYZE_ENDPOINT, response).await?;

        let envelope: AnalyzeStyleEnvelope =
            decode_json(ANALYZE_ENDPOINT, response, self.analyze_timeout).await?;
        let profile = envelope
            .into_profile()
            .map_err(|message| RequestFailure::Backend {
                endpoint: ANALYZE_ENDPOINT.into(),
                message: sanitize_backend_error(&message),
            })?;

        info!(
            avg_length = profile.avg_length,
            is_polite = profile.is_polite,
            "style profile received"
        );
        Ok(profile)
    }
}

#[async_trait]
impl PostGenerationService for BackendClient {
    async fn generate_post(
        &self,
        request: DraftRequest<'_>,
    ) -> Result<GeneratedPost, RequestFailure> {
        let image = request.image;
        debug!(
            bytes = image.data.len(),
            mime = %image.mime_type,
            url = %self.generate_url,
            "posting generate-post"
        );

        let part = multipart::Part::bytes(image.data.clone())
            .file_name(image.filename.clone())
            .mime_str(image.mime_type.essence_str())
            .map_err(|e| RequestFailure::Transport {
                endpoint: GENERATE_ENDPOINT.into(),
                message: format!("set image MIME type: {e}"),
            })?;
        let form = multipart::Form::new()
            .text("topic", request.topic.to_string())
            .text("style_prompt", request.style_prompt.to_string())
            .part("image", part);

        let response = self
            .client
            .post(&self.generate_url)
            .timeout(self.generate_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| send_failure(GENERATE_ENDPOINT, &e, self.generate_timeout))?;
        let response = ensure_success(GENERATE_ENDPOINT, response).await?;

        let post: GeneratedPost =
            decode_json(GENERATE_ENDPOINT, response, self.generate_timeout).await?;
        info!(chars = post.content.chars().count(), "post received");
        Ok(post)
    }
}

fn send_failure(endpoint: &str, error: &reqwest::Error, timeout: Duration) -> RequestFailure {
    if error.is_timeout() {
        RequestFailure::Timeout {
            endpoint: endpoint.into(),
            secs: timeout.as_secs(),
        }
    } else {
        RequestFailure::Transport {
            endpoint: endpoint.into(),
            message: sanitize_backend_error(&error.to_string()),
        }
    }
}

async fn ensure_success(endpoint: &str, response: Response) -> Result<Response, RequestFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|error| format!("<failed to read response body: {error}>"));
    let message = match error_message_from_body(&body) {
        text if text.is_empty() => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
        text => text,
    };

    Err(RequestFailure::Status {
        endpoint: endpoint.into(),
        status: status.as_u16(),
        message: sanitize_backend_error(&message),
    })
}

async fn decode_json<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
    timeout: Duration,
) -> Result<T, RequestFailure> {
    let body = response
        .text()
        .await
        .map_err(|e| send_failure(endpoint, &e, timeout))?;
    serde_json::from_str(&body).map_err(|e| RequestFailure::Decode {
        endpoint: endpoint.into(),
        message: e.to_string(),
    })
}
