//! HTTP transport for the Gemini REST API.

use super::credentials::ApiKey;
use async_trait::async_trait;
use relay_application::{GenerationTransport, TransportError, TransportResponse};
use relay_domain::{GenerateRequest, Model};
use std::time::Duration;
use tracing::trace;

/// Public Gemini API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`GeminiTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub base_url: String,
    /// Bound on a single HTTP exchange, including reading the body.
    pub request_timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Sends one `generateContent` POST per call.
///
/// Holds a shared [`reqwest::Client`] so the connection pool is reused
/// across attempts, models and requests.
#[derive(Clone)]
pub struct GeminiTransport {
    client: reqwest::Client,
    settings: GeminiSettings,
    api_key: ApiKey,
}

impl GeminiTransport {
    pub fn new(settings: GeminiSettings, api_key: ApiKey) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, settings, api_key))
    }

    /// Reuse an existing client (its own timeout settings apply).
    pub fn with_client(client: reqwest::Client, settings: GeminiSettings, api_key: ApiKey) -> Self {
        Self {
            client,
            settings,
            api_key,
        }
    }

    /// `{base}/v1beta/models/{model}:generateContent`, without the key.
    pub fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model
        )
    }

    fn map_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.settings.request_timeout)
        } else if e.is_connect() {
            TransportError::Connection(e.without_url().to_string())
        } else if e.is_builder() || e.is_body() {
            TransportError::Encode(e.without_url().to_string())
        } else {
            // The URL carries the API key; never let it reach an error message.
            TransportError::Other(e.without_url().to_string())
        }
    }
}

#[async_trait]
impl GenerationTransport for GeminiTransport {
    async fn send(
        &self,
        model: &Model,
        request: &GenerateRequest,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.endpoint(model);
        trace!(url = %url, "POST generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose())])
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let body = if status.is_success() {
            response.text().await.map_err(|e| self.map_error(e))?
        } else {
            // The error body is informational only.
            response.text().await.unwrap_or_default()
        };

        Ok(TransportResponse::new(status.as_u16(), body))
    }
}
