//! Disk-backed registry of 3D campus tour documents.
//!
//! Each tour is one JSON file in the registry directory, keyed by filename
//! stem. Documents are read fresh from disk on every request and never
//! mutated, so they are effectively immutable per request.
//!
//! Tour ids come from the outside world; [`TourRegistry::load`] validates
//! them against a safe character set before any path is built, so an id can
//! never escape the registry directory.

mod error;
mod model;
mod registry;

pub use error::TourError;
pub use model::{Hotspot, Scene, Tour};
pub use registry::TourRegistry;
