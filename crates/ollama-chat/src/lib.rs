//! Local Ollama chat backend.
//!
//! Implements [`chat_core::ChatBackend`] against the Ollama `/api/chat`
//! endpoint. Used in production for the 3D tour assistant, where the model
//! runs on the same host and needs no authentication.

mod api_types;
mod client;
mod config;

pub use api_types::{OllamaChatRequest, OllamaChatResponse};
pub use client::OllamaChat;
pub use config::{OllamaConfig, OllamaConfigBuilder};
