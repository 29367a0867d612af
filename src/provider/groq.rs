//! Groq chat-completions client (OpenAI-compatible wire format).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::ParleyConfig;
use crate::error::ParleyError;
use crate::types::{ChatMessage, FinishReason, Usage};

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{CompletionClient, CompletionRequest, CompletionResponse};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

pub struct GroqClient {
    model: String,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(model: impl Into<String>, api_key: String, base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.into(),
            api_key,
        }
    }

    /// Build a client from config, failing if no API key is resolvable.
    pub fn from_config(config: &ParleyConfig) -> Result<Self, ParleyError> {
        Ok(Self::new(
            config.model.clone(),
            config.require_api_key()?,
            config.base_url.clone(),
        ))
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let messages = request
            .messages
            .iter()
            .map(message_to_wire)
            .collect::<Vec<_>>();

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        });

        let obj = body.as_object_mut().expect("body is an object");

        if let Some(max) = request.settings.max_tokens {
            obj.insert("max_tokens".into(), max.into());
        }
        if let Some(temp) = request.settings.temperature {
            obj.insert("temperature".into(), temp.into());
        }
        if let Some(top_p) = request.settings.top_p {
            obj.insert("top_p".into(), top_p.into());
        }
        if let Some(ref stops) = request.settings.stop_sequences {
            obj.insert("stop".into(), serde_json::json!(stops));
        }

        body
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    fn provider_name(&self) -> &str {
        "groq"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ParleyError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, messages = request.messages.len(), "Groq complete");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GroqChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ParleyError::api(200, "No choices in Groq response"))?;

        let finish_reason = choice.finish_reason.as_deref().and_then(parse_finish_reason);

        Ok(CompletionResponse {
            // Missing content is a valid (empty) reply, not an error.
            text: choice.message.content.unwrap_or_default(),
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
            finish_reason,
        })
    }
}

fn parse_finish_reason(s: &str) -> Option<FinishReason> {
    match s {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "content_filter" => Some(FinishReason::ContentFilter),
        _ => None,
    }
}

fn message_to_wire(msg: &ChatMessage) -> serde_json::Value {
    serde_json::json!({ "role": msg.role.as_str(), "content": msg.content })
}

// Groq API response types (internal)

#[derive(Deserialize)]
struct GroqChatResponse {
    choices: Vec<GroqChoice>,
    usage: Option<GroqUsage>,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GroqMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct GroqUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
