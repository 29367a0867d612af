//! Configuration (explicit values > environment).
//!
//! The config is a plain value handed to whoever constructs a client; there
//! is no process-global instance and no credential is ever compiled in.

use crate::error::{ParleyError, Result};
use crate::types::GenerationSettings;

/// Default system instruction prepended to every outgoing payload.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful Medical Research Assistant. \
    You should answer questions only related to medical research. \
    You should not answer programming questions.";

/// Default model served by the Groq endpoint.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Configuration for a chat session and its completion client.
#[derive(Debug, Clone)]
pub struct ParleyConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub settings: GenerationSettings,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            settings: GenerationSettings::default(),
        }
    }
}

impl ParleyConfig {
    /// Load from environment variables, reading `.env` if present.
    ///
    /// Recognized: `GROQ_API_KEY`, `PARLEY_BASE_URL`, `PARLEY_MODEL`,
    /// `PARLEY_SYSTEM_PROMPT`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("PARLEY_BASE_URL") {
            config.base_url = Some(url);
        }
        if let Ok(model) = std::env::var("PARLEY_MODEL") {
            config.model = model;
        }
        if let Ok(prompt) = std::env::var("PARLEY_SYSTEM_PROMPT") {
            config.system_prompt = prompt;
        }

        config
    }

    /// Override the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (e.g. to point at a local mock).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the system instruction.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Resolve the API key or fail with a configuration error.
    pub fn require_api_key(&self) -> Result<String> {
        self.api_key
            .clone()
            .ok_or_else(|| ParleyError::Configuration("Missing GROQ_API_KEY".into()))
    }
}
