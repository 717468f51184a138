//! Error responses for the HTTP entrypoint.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Methods accepted on the generation routes.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayHttpError {
    #[error("Only POST is supported.")]
    MethodNotAllowed,

    #[error("Missing or invalid prompt in body.")]
    InvalidPrompt,

    #[error("{0}")]
    InvalidModel(String),

    #[error("{0}")]
    MissingCredential(String),

    /// Every candidate model failed; carries the last failure detail.
    #[error("MODEL_OVERLOADED")]
    Exhausted(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for RelayHttpError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed => {
                let mut response = (
                    StatusCode::METHOD_NOT_ALLOWED,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
                response
            }
            Self::InvalidPrompt | Self::InvalidModel(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            Self::MissingCredential(message) => {
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
            Self::Exhausted(details) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": {
                        "code": 503,
                        "message": "MODEL_OVERLOADED",
                        "details": details,
                    }
                })),
            )
                .into_response(),
            Self::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": { "code": 500, "message": message } })),
                )
                    .into_response()
            }
        }
    }
}
