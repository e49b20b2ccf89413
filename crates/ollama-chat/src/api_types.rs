//! Ollama `/api/chat` request and response types.

use chat_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// Chat request body for Ollama.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    /// Model to use
    pub model: String,
    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
    /// Always false: the assistant needs the full reply in one body
    pub stream: bool,
    /// Sampling options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaOptions>,
}

/// Ollama sampling options.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate (Ollama's num_predict)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

/// Chat response body from Ollama.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    /// The reply message; absent when Ollama reports an error in-band
    pub message: Option<OllamaResponseMessage>,
    /// In-band error text, if any
    pub error: Option<String>,
}

/// Reply message from Ollama.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaResponseMessage {
    /// Role
    pub role: String,
    /// Content
    pub content: String,
}
