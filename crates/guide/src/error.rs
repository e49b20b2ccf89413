//! Error types for the orchestrators.

use thiserror::Error;
use tours::TourError;

/// Errors surfaced by the guide and comparison orchestrators.
///
/// Upstream chat failures are collapsed into [`GuideError::Upstream`] here:
/// the transport detail is logged at the point of failure and must not leak
/// into response bodies.
#[derive(Debug, Error)]
pub enum GuideError {
    /// Requested tour does not exist (or its id failed validation).
    #[error("tour not found: {id}")]
    TourNotFound { id: String },

    /// Registry failure other than a missing tour.
    #[error("tour registry error: {0}")]
    Tour(#[from] TourError),

    /// The chat backend failed and no fallback applies.
    #[error("AI request failed")]
    Upstream,
}
