//! Shared test helpers and mock completion client.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use parley::error::ParleyError;
use parley::provider::{CompletionClient, CompletionRequest, CompletionResponse};
use parley::types::{FinishReason, Usage};

/// Mock client that records every request and replays queued results.
///
/// An empty queue yields an empty-text success, so tests only queue what
/// they care about.
pub struct CaptureClient {
    model_id: String,
    results: Mutex<VecDeque<Result<CompletionResponse, ParleyError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl CaptureClient {
    pub fn new() -> Self {
        Self {
            model_id: "capture-model".to_string(),
            results: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_text(&self, text: &str) {
        self.results
            .lock()
            .unwrap()
            .push_back(Ok(CompletionResponse {
                text: text.to_string(),
                usage: Usage::default(),
                finish_reason: Some(FinishReason::Stop),
            }));
    }

    pub fn queue_error(&self, error: ParleyError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for CaptureClient {
    fn provider_name(&self) -> &str {
        "capture"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ParleyError> {
        self.requests.lock().unwrap().push(request.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(CompletionResponse {
                    text: String::new(),
                    usage: Usage::default(),
                    finish_reason: Some(FinishReason::Stop),
                })
            })
    }
}
