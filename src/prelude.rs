//! Convenience re-exports for common use.

pub use crate::config::ParleyConfig;
pub use crate::conversation::{ChatSession, ChatTurn, SessionState, SubmitOutcome};
pub use crate::error::{ParleyError, Result};
pub use crate::provider::{CompletionClient, CompletionRequest, CompletionResponse};
pub use crate::reflow::{reflow, DEFAULT_MAX_PARAGRAPH_LEN};
pub use crate::types::{ChatMessage, FinishReason, GenerationSettings, Role, Usage};
