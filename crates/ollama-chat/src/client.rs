//! OllamaChat backend implementation.

use chat_core::{async_trait, ChatBackend, ChatError, ChatMessage, CompletionOptions};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{OllamaChatRequest, OllamaChatResponse, OllamaOptions};
use crate::config::OllamaConfig;

/// A chat backend that talks to a local Ollama instance.
pub struct OllamaChat {
    client: Client,
    config: OllamaConfig,
}

impl OllamaChat {
    /// Create a new backend with the given configuration.
    pub fn new(config: OllamaConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ChatError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "OllamaChat initialized with model: {} at {}",
            config.model, config.base_url
        );

        Ok(Self { client, config })
    }

    /// Create a backend from environment variables.
    ///
    /// See [`OllamaConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::new(OllamaConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    fn build_options(options: &CompletionOptions) -> Option<OllamaOptions> {
        if options.temperature.is_none() && options.max_tokens.is_none() {
            return None;
        }

        Some(OllamaOptions {
            temperature: options.temperature,
            num_predict: options.max_tokens,
        })
    }
}

#[async_trait]
impl ChatBackend for OllamaChat {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ChatError> {
        let url = format!("{}/api/chat", self.config.base_url);

        let request = OllamaChatRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            stream: false,
            options: Self::build_options(options),
        };

        debug!(model = %request.model, messages = request.messages.len(), "Sending Ollama chat request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let reply: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        // Ollama reports some failures inside a 200 body
        if let Some(error) = reply.error {
            return Err(ChatError::Api {
                status: status.as_u16(),
                message: error,
            });
        }

        let text = reply
            .message
            .as_ref()
            .map(|m| m.content.trim())
            .unwrap_or_default();

        if text.is_empty() {
            warn!("Ollama reply carried no content");
            return Err(ChatError::EmptyReply);
        }

        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "OllamaChat"
    }
}
