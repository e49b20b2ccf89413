//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Which backend answers tour-assistant requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantBackend {
    /// Local Ollama instance (default).
    Ollama,
    /// The same OpenAI-compatible endpoint the comparison feature uses.
    OpenAi,
}

/// Web server configuration.
///
/// The comparison feature always uses the OpenAI-compatible backend, so
/// `OPENAI_API_KEY` is required regardless of `ASSISTANT_BACKEND`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Directory of tour JSON documents.
    pub tours_dir: String,
    /// Directory of static assets.
    pub static_dir: String,
    /// Backend for the tour assistant.
    pub assistant_backend: AssistantBackend,
    /// Seed sample universities on startup when the table is empty.
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:universities.db?mode=rwc` |
    /// | `TOURS_DIR` | Tour documents directory | `data/tours` |
    /// | `STATIC_DIR` | Static assets directory | `static` |
    /// | `ASSISTANT_BACKEND` | `ollama` or `openai` | `ollama` |
    /// | `SEED_DB` | Seed sample data on startup | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:universities.db?mode=rwc".to_string());

        let tours_dir = env::var("TOURS_DIR").unwrap_or_else(|_| "data/tours".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let assistant_backend = match env::var("ASSISTANT_BACKEND") {
            Err(_) => AssistantBackend::Ollama,
            Ok(value) => match value.to_lowercase().as_str() {
                "ollama" => AssistantBackend::Ollama,
                "openai" => AssistantBackend::OpenAi,
                other => return Err(ConfigError::UnknownBackend(other.to_string())),
            },
        };

        let seed = env::var("SEED_DB")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            addr,
            database_url,
            tours_dir,
            static_dir,
            assistant_backend,
            seed,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ADDR format")]
    InvalidAddr,

    #[error("Unknown ASSISTANT_BACKEND: {0} (expected 'ollama' or 'openai')")]
    UnknownBackend(String),
}
