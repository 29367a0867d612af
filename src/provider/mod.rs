//! Completion client trait and implementations.

pub mod groq;
pub mod http;

use async_trait::async_trait;

use crate::error::ParleyError;
use crate::types::{ChatMessage, FinishReason, GenerationSettings, Usage};

/// A request sent to a completion endpoint.
///
/// `messages` is the full wire payload: the system instruction first, then
/// the conversation history ending with the newest user message.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub settings: GenerationSettings,
}

/// Response from a completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub text: String,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by completion clients.
///
/// The chat session depends only on this: given message history, return
/// assistant text or an error.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &str;

    /// The model ID this client serves.
    fn model_id(&self) -> &str;

    /// Request a completion (non-streaming).
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, ParleyError>;
}
