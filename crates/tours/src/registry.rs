//! Tour registry - loads tour documents from a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TourError;
use crate::model::Tour;

/// A directory of tour documents, one `<id>.json` file per tour.
#[derive(Debug, Clone)]
pub struct TourRegistry {
    dir: PathBuf,
}

/// Externally supplied ids are only ever joined to the registry path after
/// passing this check.
fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl TourRegistry {
    /// Create a registry over the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The registry directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a tour by id.
    ///
    /// Returns `Ok(None)` when no file with that id exists, so callers can
    /// render a "not found" response. An id that fails validation is an
    /// error, never a path lookup.
    pub async fn load(&self, tour_id: &str) -> Result<Option<Tour>, TourError> {
        if !is_safe_id(tour_id) {
            warn!(tour_id, "Rejected unsafe tour id");
            return Err(TourError::InvalidId {
                id: tour_id.to_string(),
            });
        }

        let path = self.dir.join(format!("{}.json", tour_id));

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(tour_id, "Tour file not found");
                return Ok(None);
            }
            Err(err) => return Err(TourError::Io(err)),
        };

        let tour: Tour = serde_json::from_str(&raw)?;
        Ok(Some(tour))
    }

    /// List available tour ids (filename stems of `*.json` files), sorted.
    pub async fn list(&self) -> Result<Vec<String>, TourError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut ids = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}
