//! Tour document model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A tour document: a titled scene graph with a designated starting scene.
///
/// Scenes keep their file order (`IndexMap`), so prompt rendering is
/// deterministic for a given document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    /// Display title.
    pub title: String,
    /// Id of the scene the viewer opens on.
    #[serde(rename = "startScene")]
    pub start_scene: String,
    /// Scene id to scene.
    pub scenes: IndexMap<String, Scene>,
}

/// One location in a tour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Display title.
    pub title: String,
    /// Guide text for the location; may be absent or empty, in which case
    /// the assistant synthesizes one.
    #[serde(default)]
    pub description: Option<String>,
    /// Panorama image filename.
    #[serde(default)]
    pub image: Option<String>,
    /// Navigation links to other scenes.
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

/// A navigation link rendered inside a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotspot {
    /// Link label.
    pub text: String,
    /// Target scene id.
    pub to: String,
}

impl Tour {
    /// Look up a scene by id.
    pub fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.get(scene_id)
    }
}

impl Scene {
    /// The stored description, byte-for-byte, if it is present and non-blank.
    pub fn stored_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}
