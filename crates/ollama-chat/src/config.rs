//! Configuration for the Ollama backend.

use std::env;
use std::time::Duration;

/// Configuration for [`crate::OllamaChat`].
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Ollama base URL.
    pub base_url: String,

    /// Model name to use.
    pub model: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "qwen2.5:7b".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl OllamaConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `OLLAMA_URL` | Ollama base URL | `http://localhost:11434` |
    /// | `OLLAMA_MODEL` | Model name | `qwen2.5:7b` |
    pub fn from_env() -> Self {
        let base_url =
            env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "qwen2.5:7b".to_string());

        Self {
            base_url,
            model,
            ..Self::default()
        }
    }

    /// Create a new config builder.
    pub fn builder() -> OllamaConfigBuilder {
        OllamaConfigBuilder::default()
    }
}

/// Builder for [`OllamaConfig`].
#[derive(Debug, Default)]
pub struct OllamaConfigBuilder {
    config: OllamaConfig,
}

impl OllamaConfigBuilder {
    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OllamaConfig {
        self.config
    }
}
