//! Tour assistant route.

use axum::extract::State;
use axum::Json;
use guide::TourRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request from the tour viewer.
#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub tour_id: Option<String>,
    #[serde(default)]
    pub current_scene: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Assistant reply; the text is the sole payload field.
#[derive(Serialize)]
pub struct AssistantResponse {
    pub text: String,
}

/// Answer one assistant turn.
pub async fn assistant_api(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>> {
    let Some(tour_id) = request.tour_id.filter(|id| !id.trim().is_empty()) else {
        return Err(ApiError::BadRequest("tour_id is required".to_string()));
    };

    debug!(%tour_id, scene = ?request.current_scene, "Assistant request");

    let text = state
        .guide
        .respond(&TourRequest {
            tour_id,
            current_scene: request.current_scene,
            message: request.message,
        })
        .await?;

    Ok(Json(AssistantResponse { text }))
}
