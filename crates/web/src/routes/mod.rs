//! Route handlers for the university platform API.

pub mod assistant;
pub mod compare;
pub mod health;
pub mod tour;
pub mod universities;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Catalog
        .route("/api/universities", get(universities::list_api))
        .route("/api/search", get(universities::search_api))
        // AI comparison
        .route("/api/compare_ai", post(compare::compare_api))
        // 3D tours
        .route("/api/tours", get(tour::list_api))
        .route("/api/tour/:tour_id", get(tour::tour_api))
        .route("/api/assistant", post(assistant::assistant_api))
}
