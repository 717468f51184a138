//! Route definitions for the relay.

use super::handlers;
use super::state::RelayState;
use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{MethodRouter, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Both paths accept the same generation request.
pub const GENERATE_PATHS: [&str; 2] = ["/", "/generate-roadmap"];

fn generate_route() -> MethodRouter<RelayState> {
    post(handlers::generate)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}

/// Creates the axum router with all routes configured.
pub fn create_router(state: RelayState) -> Router {
    // Browser clients call from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    let mut router = Router::new().route("/health", get(handlers::health));
    for path in GENERATE_PATHS {
        router = router.route(path, generate_route());
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::state::{ProviderError, UseCaseProvider};
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use relay_application::{
        GenerateTextUseCase, GenerationTransport, Sleeper, TransportError, TransportResponse,
    };
    use relay_domain::{GenerateRequest, Model};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;

    /// Replays canned responses and records which model each call went to.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: Mutex<VecDeque<TransportResponse>>,
        calls: Mutex<Vec<Model>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<TransportResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Model> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationTransport for ScriptedTransport {
        async fn send(
            &self,
            model: &Model,
            _request: &GenerateRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.calls.lock().unwrap().push(model.clone());
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| TransportResponse::new(503, "overloaded")))
        }
    }

    struct InstantSleeper;

    #[async_trait]
    impl Sleeper for InstantSleeper {
        async fn sleep(&self, _duration: Duration) {}
    }

    enum Provider {
        Scripted(Arc<ScriptedTransport>),
        NoKey,
    }

    impl UseCaseProvider for Provider {
        fn provide(&self) -> Result<GenerateTextUseCase, ProviderError> {
            match self {
                Provider::Scripted(transport) => Ok(GenerateTextUseCase::with_sleeper(
                    transport.clone(),
                    Arc::new(InstantSleeper),
                )),
                Provider::NoKey => Err(ProviderError::MissingCredential(
                    "GEMINI_API_KEY not set in environment.".to_string(),
                )),
            }
        }
    }

    fn ok_text(text: &str) -> TransportResponse {
        TransportResponse::new(
            200,
            json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
                .to_string(),
        )
    }

    fn router_with(responses: Vec<TransportResponse>) -> (Router, Arc<ScriptedTransport>) {
        let transport = Arc::new(ScriptedTransport::new(responses));
        let state = RelayState::new(Arc::new(Provider::Scripted(transport.clone())));
        (create_router(state), transport)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::ORIGIN, "https://app.example")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_json_string() {
        let (router, transport) = router_with(vec![ok_text("roadmap")]);

        let response = router
            .oneshot(post_json("/", r#"{"prompt":"plan"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(json_body(response).await, json!("roadmap"));
        assert_eq!(transport.calls(), vec![Model::Gemini25Flash]);
    }

    #[tokio::test]
    async fn test_legacy_path_is_served() {
        let (router, _) = router_with(vec![ok_text("ok")]);
        let response = router
            .oneshot(post_json("/generate-roadmap", r#"{"prompt":"plan"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fallback_to_last_model() {
        // Three models overloaded on every attempt, the fourth answers
        let mut responses: Vec<_> = (0..9).map(|_| TransportResponse::new(503, "busy")).collect();
        responses.push(ok_text("finally"));
        let (router, transport) = router_with(responses);

        let response = router
            .oneshot(post_json("/", r#"{"prompt":"plan"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!("finally"));
        assert_eq!(transport.calls().len(), 10);
    }

    #[tokio::test]
    async fn test_exhaustion_is_model_overloaded() {
        let (router, transport) = router_with(vec![TransportResponse::new(400, "bad model")]);

        let response = router
            .oneshot(post_json(
                "/",
                r#"{"prompt":"plan","requestedModel":"gemini-exp"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], 503);
        assert_eq!(body["error"]["message"], "MODEL_OVERLOADED");
        let details = body["error"]["details"].as_str().unwrap();
        assert!(details.starts_with("gemini-exp: "), "{}", details);
        assert!(details.contains("400"), "{}", details);
        assert_eq!(transport.calls(), vec![Model::Custom("gemini-exp".to_string())]);
    }

    #[tokio::test]
    async fn test_invalid_prompt_never_reaches_backend() {
        let (router, transport) = router_with(vec![]);

        let response = router
            .oneshot(post_json("/", r#"{"prompt":"  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Missing or invalid prompt in body." })
        );
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let router = create_router(RelayState::new(Arc::new(Provider::NoKey)));

        let response = router
            .oneshot(post_json("/", r#"{"prompt":"plan"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "GEMINI_API_KEY not set in environment." })
        );
    }

    #[tokio::test]
    async fn test_options_answers_ok() {
        let (router, _) = router_with(vec![]);

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_other_methods_rejected() {
        let (router, _) = router_with(vec![]);

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST, OPTIONS");
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Only POST is supported." })
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = router_with(vec![]);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "status": "ok" }));
    }
}
