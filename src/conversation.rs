//! Conversation controller: message history, pending flag, and the
//! submit/complete cycle.

use std::fmt;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use tracing::{debug, warn};

use crate::config::ParleyConfig;
use crate::error::ParleyError;
use crate::provider::{CompletionClient, CompletionRequest};
use crate::reflow::reflow;
use crate::types::{ChatMessage, GenerationSettings, Role};

/// Controller state. `AwaitingResponse` while a completion request is
/// outstanding; at most one request is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// Result of a `submit` call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// User message and assistant reply both appended.
    Completed,
    /// User message appended; the completion request failed and no assistant
    /// message was added. The error is also logged.
    Failed(ParleyError),
    /// Nothing happened: input was blank, or a request was already pending.
    Ignored,
}

/// One conversation turn as exposed to a rendering layer: the role plus the
/// reflowed paragraph sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub paragraphs: Vec<String>,
}

type ChangeListener = Box<dyn Fn(&[ChatMessage]) + Send + Sync>;

/// Owns the conversation for one chat session.
///
/// The controller is UI-free: it mutates its message list and pending flag,
/// fires the optional change listener, and leaves rendering to the caller.
/// The completion client is an explicit dependency, injected at construction.
pub struct ChatSession {
    client: Arc<dyn CompletionClient>,
    system_prompt: String,
    settings: GenerationSettings,
    messages: Vec<ChatMessage>,
    pending: bool,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatSession")
            .field("model", &self.client.model_id())
            .field("messages", &self.messages.len())
            .field("pending", &self.pending)
            .finish()
    }
}

impl ChatSession {
    /// Create a session backed by `client`, taking the system prompt and
    /// generation settings from `config`.
    pub fn new(client: Arc<dyn CompletionClient>, config: &ParleyConfig) -> Self {
        Self {
            client,
            system_prompt: config.system_prompt.clone(),
            settings: config.settings.clone(),
            messages: Vec::new(),
            pending: false,
            on_change: None,
        }
    }

    /// Register a listener fired after every state change (message appended
    /// or pending flag flipped).
    pub fn on_change(&mut self, listener: impl Fn(&[ChatMessage]) + Send + Sync + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// The conversation so far, in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a completion request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn state(&self) -> SessionState {
        if self.pending {
            SessionState::AwaitingResponse
        } else {
            SessionState::Idle
        }
    }

    /// Per-turn display surface: role plus reflowed paragraphs.
    pub fn turns(&self, max_paragraph_len: usize) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .map(|m| ChatTurn {
                role: m.role,
                paragraphs: reflow(&m.content, max_paragraph_len),
            })
            .collect()
    }

    /// Submit a user message and wait for the assistant reply.
    ///
    /// Blank input (empty after trimming) is ignored. A submit while a
    /// request is already pending is ignored too; the pending flag is
    /// authoritative and no queueing is attempted. On provider failure the
    /// conversation keeps only the user message and the error is returned in
    /// the outcome after being logged.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.pending {
            debug!("submit ignored: completion request already pending");
            return SubmitOutcome::Ignored;
        }

        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        self.notify();

        let request = self.build_request();
        let result = self.client.complete(&request).await;

        // Pending clears on both paths before the outcome is reported.
        self.pending = false;

        match result {
            Ok(response) => {
                self.messages.push(ChatMessage::assistant(response.text));
                self.notify();
                SubmitOutcome::Completed
            }
            Err(error) => {
                warn!(%error, "completion request failed; no assistant message appended");
                self.notify();
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Submit a percent-encoded message, e.g. one lifted from a URL query
    /// parameter, exactly as if the user had typed the decoded text.
    pub async fn submit_encoded(&mut self, raw: &str) -> SubmitOutcome {
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        self.submit(&decoded).await
    }

    /// Outgoing wire payload: the fixed system instruction, then the full
    /// conversation with every non-user role coerced to assistant.
    fn build_request(&self) -> CompletionRequest {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend(self.messages.iter().map(|m| ChatMessage {
            role: match m.role {
                Role::User => Role::User,
                _ => Role::Assistant,
            },
            content: m.content.clone(),
            timestamp: m.timestamp,
        }));
        CompletionRequest {
            messages,
            settings: self.settings.clone(),
        }
    }

    fn notify(&self) {
        if let Some(listener) = &self.on_change {
            listener(&self.messages);
        }
    }
}
