//! Tour document routes.

use axum::extract::{Path, State};
use axum::Json;
use tours::{Tour, TourError};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// List available tour ids.
pub async fn list_api(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let ids = state.guide.tours().list().await?;
    Ok(Json(ids))
}

/// Get a full tour document.
pub async fn tour_api(
    State(state): State<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<Tour>> {
    let loaded = match state.guide.tours().load(&tour_id).await {
        Ok(loaded) => loaded,
        // Unsafe ids are indistinguishable from missing tours to the caller
        Err(TourError::InvalidId { .. }) => None,
        Err(err) => return Err(err.into()),
    };

    match loaded {
        Some(tour) => Ok(Json(tour)),
        None => Err(ApiError::NotFound("not found".to_string())),
    }
}
