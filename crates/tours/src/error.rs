//! Tour registry error types.

use thiserror::Error;

/// Errors that can occur when loading tour documents.
#[derive(Debug, Error)]
pub enum TourError {
    /// Id contains characters outside the allowed set.
    #[error("invalid tour id: {id}")]
    InvalidId { id: String },

    /// Filesystem failure other than the file simply not existing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File exists but is not a valid tour document.
    #[error("malformed tour document: {0}")]
    Malformed(#[from] serde_json::Error),
}
