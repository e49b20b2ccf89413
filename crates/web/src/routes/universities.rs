//! Catalog routes: listing and search.

use axum::extract::{Query, State};
use axum::Json;
use database::{university, UniversityCard};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Upper bound on search results per request.
const SEARCH_LIMIT: i64 = 10;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// List all universities as lightweight cards.
pub async fn list_api(State(state): State<AppState>) -> Result<Json<Vec<UniversityCard>>> {
    let cards = university::list_universities(state.db.pool(), None).await?;
    Ok(Json(cards))
}

/// Search universities by name or description.
///
/// A blank query returns an empty list without touching the store.
pub async fn search_api(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<UniversityCard>>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let cards = university::search_universities(state.db.pool(), query, SEARCH_LIMIT).await?;
    Ok(Json(cards))
}
