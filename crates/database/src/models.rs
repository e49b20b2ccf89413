//! Data models for the university catalog.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full university record.
///
/// List fields are stored as JSON text columns; see
/// [`crate::university::parse_json_list`] for the decode policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    /// Unique, stable identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// City the main campus is in.
    pub city: Option<String>,
    /// Institution type, e.g. "public" or "private".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Platform rating, 0-10.
    pub rating: Option<f64>,
    /// Approximate tuition per year, KZT.
    pub tuition_fee: Option<i64>,
    /// Main degree programs.
    pub programs: Vec<String>,
    /// Languages of instruction, e.g. ["ru", "kz", "en"].
    pub languages: Vec<String>,
    /// Internationality score, 0-10.
    pub international_score: Option<f64>,
    /// Graduate employment rate; either a 0-1 fraction or a 0-100 percentage.
    pub employment_rate: Option<f64>,
    /// Student reviews, newest first.
    pub reviews: Vec<String>,
    /// Campus photo URL.
    pub image_url: Option<String>,
    /// Short free-text description.
    pub description: Option<String>,
}

/// A lightweight record for list and search responses.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct UniversityCard {
    /// Unique, stable identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// City the main campus is in.
    pub city: Option<String>,
    /// Platform rating, 0-10.
    pub rating: Option<f64>,
    /// Campus photo URL.
    pub image_url: Option<String>,
}

/// Fields for inserting a new university.
#[derive(Debug, Clone, Default)]
pub struct NewUniversity {
    pub name: String,
    pub city: Option<String>,
    pub kind: Option<String>,
    pub rating: Option<f64>,
    pub tuition_fee: Option<i64>,
    pub programs: Vec<String>,
    pub languages: Vec<String>,
    pub international_score: Option<f64>,
    pub employment_rate: Option<f64>,
    pub reviews: Vec<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Raw row shape before JSON list columns are decoded.
#[derive(Debug, FromRow)]
pub(crate) struct UniversityRow {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub rating: Option<f64>,
    pub tuition_fee: Option<i64>,
    pub programs: Option<String>,
    pub languages: Option<String>,
    pub international_score: Option<f64>,
    pub employment_rate: Option<f64>,
    pub reviews: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}
