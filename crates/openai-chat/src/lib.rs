//! OpenAI-compatible chat backend.
//!
//! Implements [`chat_core::ChatBackend`] against any endpoint that speaks the
//! OpenAI `/v1/chat/completions` protocol. Used in production for the
//! university comparison feature.
//!
//! # Example
//!
//! ```no_run
//! use chat_core::{ChatBackend, ChatMessage, CompletionOptions};
//! use openai_chat::{OpenAiChat, OpenAiConfig};
//!
//! # async fn example() -> Result<(), chat_core::ChatError> {
//! let config = OpenAiConfig::builder()
//!     .api_key("sk-...")
//!     .model("gpt-4.1-mini")
//!     .build();
//! let backend = OpenAiChat::new(config)?;
//!
//! let reply = backend
//!     .complete(
//!         &[ChatMessage::user("Hello!")],
//!         &CompletionOptions::default(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api_types;
mod client;
mod config;

pub use api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
pub use client::OpenAiChat;
pub use config::{OpenAiConfig, OpenAiConfigBuilder};
