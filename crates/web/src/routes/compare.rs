//! AI comparison route.

use axum::extract::State;
use axum::Json;
use database::university;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to compare two universities.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub id1: Option<i64>,
    pub id2: Option<i64>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// Comparison result.
#[derive(Serialize)]
pub struct CompareResponse {
    pub result: String,
}

/// Validate a comparison request, returning the two distinct ids.
///
/// Kept separate from the handler so the no-external-call guarantees can be
/// tested without a server.
pub fn validate_compare_request(request: &CompareRequest) -> Result<(i64, i64)> {
    let (Some(id1), Some(id2)) = (request.id1, request.id2) else {
        return Err(ApiError::BadRequest(
            "id1 and id2 are required".to_string(),
        ));
    };

    if id1 == id2 {
        return Err(ApiError::BadRequest(
            "id1 and id2 must be different universities".to_string(),
        ));
    }

    Ok((id1, id2))
}

/// Compare two universities via the AI backend.
pub async fn compare_api(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>> {
    let (id1, id2) = validate_compare_request(&request)?;

    let pool = state.db.pool();

    let first = university::get_university(pool, id1)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("university {id1} not found")))?;
    let second = university::get_university(pool, id2)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("university {id2} not found")))?;

    info!(id1, id2, goal = ?request.goal, "Comparing universities");

    let result = state
        .comparer
        .compare(&first, &second, request.goal.as_deref())
        .await?;

    Ok(Json(CompareResponse { result }))
}
