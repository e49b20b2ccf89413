//! OpenAiChat backend implementation.

use chat_core::{async_trait, ChatBackend, ChatError, ChatMessage, CompletionOptions};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenAiConfig;

/// A chat backend that talks to an OpenAI-compatible API.
pub struct OpenAiChat {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiChat {
    /// Create a new backend with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ChatError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!("OpenAiChat initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a backend from environment variables.
    ///
    /// See [`OpenAiConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, ChatError> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl ChatBackend for OpenAiChat {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ChatError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        debug!(model = %request.model, messages = request.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a structured API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ChatError::Api {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            return Err(ChatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        let text = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if text.is_empty() {
            warn!("Chat completion returned no content");
            return Err(ChatError::EmptyReply);
        }

        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "OpenAiChat"
    }
}
