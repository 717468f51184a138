//! Per-request wiring of the Gemini adapter into the cascade use case.

use relay_application::{CascadeParams, GenerateTextUseCase, TransportError};
use relay_infrastructure::{CredentialResolver, GeminiSettings, GeminiTransport, RuntimeConfig};
use relay_presentation::{ProviderError, UseCaseProvider};
use std::sync::Arc;

/// Builds a Gemini-backed use case, resolving the API key each time.
///
/// The reqwest client is created once so every request shares its
/// connection pool.
pub struct GeminiProvider {
    client: reqwest::Client,
    settings: GeminiSettings,
    credentials: CredentialResolver,
    params: CascadeParams,
}

impl GeminiProvider {
    pub fn new(config: &RuntimeConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.gemini.request_timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            settings: config.gemini.clone(),
            credentials: config.credentials.clone(),
            params: config.cascade.clone(),
        })
    }
}

impl UseCaseProvider for GeminiProvider {
    fn provide(&self) -> Result<GenerateTextUseCase, ProviderError> {
        let api_key = self
            .credentials
            .resolve()
            .map_err(|e| ProviderError::MissingCredential(e.to_string()))?;
        let transport =
            GeminiTransport::with_client(self.client.clone(), self.settings.clone(), api_key);
        Ok(GenerateTextUseCase::new(Arc::new(transport)).with_params(self.params.clone()))
    }
}
