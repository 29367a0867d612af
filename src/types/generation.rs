//! Generation settings and related enums.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Settings controlling text generation.
///
/// Defaults mirror the upstream chat deployment: `llama3-8b-8192`,
/// temperature 0.5, 1024 max tokens, top_p 1, no stop sequences.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub stop_sequences: Option<Vec<String>>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: Some(1024),
            temperature: Some(0.5),
            top_p: Some(1.0),
            stop_sequences: None,
        }
    }
}

/// Why generation finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Error,
}
