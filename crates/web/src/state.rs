//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use guide::{TourGuide, UniversityComparer};

/// Shared application state.
///
/// The chat backends live inside the orchestrators, injected at startup;
/// nothing here reads ambient configuration.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Tour assistant orchestrator.
    pub guide: Arc<TourGuide>,
    /// University comparison orchestrator.
    pub comparer: Arc<UniversityComparer>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, guide: Arc<TourGuide>, comparer: Arc<UniversityComparer>) -> Self {
        Self { db, guide, comparer }
    }
}
