//! AI tour-guide and university-comparison orchestrators.
//!
//! This crate combines the tour registry, the prompt builders, and an
//! injected [`chat_core::ChatBackend`] into the two user-facing AI features:
//!
//! - [`TourGuide`] - Answers tour-assistant requests: mini-info
//!   short-circuit, general chat, and a bounded language-validation retry
//!   that masks repeated failures with a fixed apology
//! - [`UniversityComparer`] - Builds a two-university comparison prompt and
//!   issues a single chat call
//!
//! Chat failures are explicit [`chat_core::ChatError`] values all the way up
//! to these orchestrators, which alone decide what the end user sees.

pub mod config;
pub mod error;
pub mod language;
pub mod prompt;

mod assistant;
mod compare;

pub use assistant::{TourGuide, TourRequest};
pub use compare::UniversityComparer;
pub use config::GuideConfig;
pub use error::GuideError;
