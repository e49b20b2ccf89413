//! HTTP API for the university platform.
//!
//! Serves the catalog, the AI comparison endpoint, and the 3D tour
//! assistant. Chat backends are constructed once here and injected into the
//! orchestrators; handlers never read ambient configuration.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use chat_core::ChatBackend;
use database::Database;
use guide::{GuideConfig, TourGuide, UniversityComparer};
use ollama_chat::OllamaChat;
use openai_chat::OpenAiChat;
use tours::TourRegistry;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::{AssistantBackend, Config};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting university platform server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    if config.seed {
        database::seed::seed_sample_universities(db.pool()).await?;
    }

    // Comparison always talks to the OpenAI-compatible endpoint
    let openai: Arc<OpenAiChat> = Arc::new(OpenAiChat::from_env()?);
    let comparer = Arc::new(UniversityComparer::new(openai.clone()));

    // The tour assistant backend is selectable
    let assistant_chat: Arc<dyn ChatBackend> = match config.assistant_backend {
        AssistantBackend::Ollama => Arc::new(OllamaChat::from_env()?),
        AssistantBackend::OpenAi => openai,
    };
    info!(backend = assistant_chat.name(), "Tour assistant backend ready");

    let guide = Arc::new(TourGuide::new(
        assistant_chat,
        TourRegistry::new(&config.tours_dir),
        GuideConfig::default(),
    ));

    // Build application state
    let state = AppState::new(db, guide, comparer);

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "University platform server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
