//! Scripted port implementations shared by the use case tests.

use crate::ports::generation_transport::{GenerationTransport, TransportError, TransportResponse};
use crate::ports::sleeper::Sleeper;
use async_trait::async_trait;
use relay_domain::{GenerateRequest, Model};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) type Scripted = Result<TransportResponse, TransportError>;

/// Replays a queue of responses per model and records every call.
///
/// A model whose queue runs dry keeps returning its last scripted response.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    last: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn script(self, model: &str, responses: Vec<Scripted>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(model.to_string(), VecDeque::from(responses));
        self
    }

    pub(crate) fn always(self, model: &str, response: Scripted) -> Self {
        self.script(model, vec![response])
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_for(&self, model: &str) -> usize {
        self.calls().iter().filter(|m| *m == model).count()
    }
}

#[async_trait]
impl GenerationTransport for ScriptedTransport {
    async fn send(
        &self,
        model: &Model,
        _request: &GenerateRequest,
    ) -> Result<TransportResponse, TransportError> {
        let key = model.as_str().to_string();
        self.calls.lock().unwrap().push(key.clone());

        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front());
        match next {
            Some(response) => {
                self.last.lock().unwrap().insert(key, response.clone());
                response
            }
            None => self
                .last
                .lock()
                .unwrap()
                .get(&key)
                .cloned()
                .unwrap_or_else(|| Err(TransportError::Other(format!("no script for {}", key)))),
        }
    }
}

/// Records requested delays without waiting.
#[derive(Default)]
pub(crate) struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(crate) fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub(crate) fn ok_text(text: &str) -> Scripted {
    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    });
    Ok(TransportResponse::new(200, body.to_string()))
}

pub(crate) fn status(code: u16, body: &str) -> Scripted {
    Ok(TransportResponse::new(code, body))
}
