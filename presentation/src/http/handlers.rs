//! HTTP request handlers for the relay.

use super::error::RelayHttpError;
use super::state::{ProviderError, RelayState};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use relay_application::GenerateTextInput;
use relay_domain::{CascadeOutcome, Model, Prompt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Body of a generation request: `{ "prompt": string, "requestedModel"?: string }`.
///
/// Parsed leniently from raw JSON: a non-string or blank `requestedModel`
/// is ignored, while anything wrong with `prompt` is a 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateBody {
    pub prompt: Prompt,
    pub requested_model: Option<Model>,
}

impl GenerateBody {
    pub fn parse(bytes: &[u8]) -> Result<Self, RelayHttpError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|_| RelayHttpError::InvalidPrompt)?;

        let prompt = value
            .get("prompt")
            .and_then(Value::as_str)
            .and_then(|p| Prompt::new(p).ok())
            .ok_or(RelayHttpError::InvalidPrompt)?;

        let requested_model = match value.get("requestedModel").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => Some(
                name.parse::<Model>()
                    .map_err(|e| RelayHttpError::InvalidModel(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            prompt,
            requested_model,
        })
    }

    fn into_input(self) -> GenerateTextInput {
        let input = GenerateTextInput::new(self.prompt);
        match self.requested_model {
            Some(model) => input.with_requested_model(model),
            None => input,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// CORS preflight answer.
pub async fn preflight() -> &'static str {
    "ok"
}

pub async fn method_not_allowed() -> RelayHttpError {
    RelayHttpError::MethodNotAllowed
}

/// Run the prompt through the cascade.
///
/// Answers 200 with the generated text as a JSON string, or 503
/// `MODEL_OVERLOADED` with the last failure detail when every model failed.
pub async fn generate(
    State(state): State<RelayState>,
    body: Bytes,
) -> Result<Response, RelayHttpError> {
    let body = GenerateBody::parse(&body)?;
    debug!(requested_model = ?body.requested_model, "Generation request accepted");

    let use_case = state.provider.provide().map_err(|e| match e {
        ProviderError::MissingCredential(message) => RelayHttpError::MissingCredential(message),
        ProviderError::Setup(message) => RelayHttpError::Internal(message),
    })?;

    let outcome = use_case
        .execute(body.into_input())
        .await
        .map_err(|e| RelayHttpError::Internal(e.to_string()))?;

    match outcome {
        CascadeOutcome::Success(text) => Ok(Json(text).into_response()),
        CascadeOutcome::Exhausted(detail) => Err(RelayHttpError::Exhausted(detail)),
    }
}
