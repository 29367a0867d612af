//! Parley — chat sessions over OpenAI-compatible completion endpoints.
//!
//! A small library for linear chat conversations: a [`conversation::ChatSession`]
//! owns the message history and pending flag, delegates to a
//! [`provider::CompletionClient`], and exposes each turn as reflowed display
//! paragraphs via [`reflow`].
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use parley::config::ParleyConfig;
//! use parley::conversation::ChatSession;
//! use parley::provider::groq::GroqClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ParleyConfig::from_env();
//! let client = Arc::new(GroqClient::from_config(&config)?);
//! let mut session = ChatSession::new(client, &config);
//! session.submit("What is a randomized controlled trial?").await;
//! for turn in session.turns(500) {
//!     println!("{:?}: {} paragraphs", turn.role, turn.paragraphs.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod reflow;
pub mod types;
