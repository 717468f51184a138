//! Generate Text use case: the model cascade.
//!
//! Tries each candidate model in priority order. A model is abandoned when
//! its [`BackoffRetrier`] call fails (any error) or when the payload holds
//! only blank text; the failure detail becomes the running last error and the
//! cascade moves on. The first model producing non-blank text wins and no
//! later model is contacted.

use crate::config::CascadeParams;
use crate::ports::generation_transport::GenerationTransport;
use crate::ports::progress::{CascadeProgressNotifier, NoCascadeProgress};
use crate::ports::sleeper::{Sleeper, TokioSleeper};
use crate::use_cases::backoff_retrier::BackoffRetrier;
use relay_domain::util::preview;
use relay_domain::{
    CascadeOutcome, CascadePlan, DomainError, GenerateRequest, Model, Prompt, extract_text,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`GenerateTextUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateTextInput {
    pub prompt: Prompt,
    /// Replaces the default cascade entirely when set.
    pub requested_model: Option<Model>,
}

impl GenerateTextInput {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            requested_model: None,
        }
    }

    pub fn with_requested_model(mut self, model: Model) -> Self {
        self.requested_model = Some(model);
        self
    }
}

/// Use case for running a prompt through the model cascade.
#[derive(Clone)]
pub struct GenerateTextUseCase {
    retrier: BackoffRetrier,
    params: CascadeParams,
}

impl GenerateTextUseCase {
    pub fn new(transport: Arc<dyn GenerationTransport>) -> Self {
        Self::with_sleeper(transport, Arc::new(TokioSleeper))
    }

    pub fn with_sleeper(
        transport: Arc<dyn GenerationTransport>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            retrier: BackoffRetrier::new(transport, sleeper),
            params: CascadeParams::default(),
        }
    }

    pub fn with_params(mut self, params: CascadeParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &CascadeParams {
        &self.params
    }

    /// Execute the cascade without progress reporting.
    pub async fn execute(&self, input: GenerateTextInput) -> Result<CascadeOutcome, DomainError> {
        self.execute_with_progress(input, &NoCascadeProgress).await
    }

    /// Execute the cascade with progress callbacks.
    ///
    /// Errors only when there is nothing to try (empty default model list);
    /// every backend failure is folded into [`CascadeOutcome::Exhausted`].
    pub async fn execute_with_progress(
        &self,
        input: GenerateTextInput,
        progress: &dyn CascadeProgressNotifier,
    ) -> Result<CascadeOutcome, DomainError> {
        let plan = CascadePlan::resolve(input.requested_model, self.params.models.clone())?;
        let request = GenerateRequest::user_prompt(&input.prompt);

        info!(
            models = plan.len(),
            "Starting cascade: {}",
            preview(input.prompt.content(), 80)
        );

        let total = plan.len();
        let mut last_error = String::new();
        for (index, model) in plan.iter().enumerate() {
            progress.on_model_start(model, index, total);

            match self.retrier.call(model, &request, progress).await {
                Ok(payload) => {
                    let text = extract_text(&payload);
                    if let Some(outcome) = CascadeOutcome::from_text(&text) {
                        info!(model = %model, chars = text.len(), "Cascade succeeded");
                        progress.on_success(model);
                        return Ok(outcome);
                    }
                    last_error = format!("Empty response from {}", model);
                }
                Err(e) => {
                    last_error = format!("{}: {}", model, e);
                }
            }

            warn!(model = %model, "Model unusable: {}", last_error);
            progress.on_model_failed(model, &last_error);
        }

        warn!("All {} models exhausted", total);
        progress.on_exhausted(&last_error);
        Ok(CascadeOutcome::exhausted(last_error))
    }
}
