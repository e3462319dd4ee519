use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::path::DEFAULT_MODEL_PATH;

/// A page section in viewport heights, used to lay out the simulated page
/// on native builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub name: String,
    pub top: f32,
    pub height: f32,
}

/// Scene manifest as a Bevy asset. Mirrors the JSON structure exactly;
/// every field is optional in the file.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default)]
    pub scene_index: usize,
    #[serde(default)]
    pub animation_index: usize,
    /// Enables the orbit camera controls in the render loop.
    #[serde(default)]
    pub camera_controls: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page_sections: Vec<PageSection>,
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            scene_index: 0,
            animation_index: 0,
            camera_controls: false,
            page_sections: Vec::new(),
        }
    }
}

impl SceneManifest {
    /// Sections of the simulated page, falling back to the built-in layout.
    pub fn page_sections(&self) -> Vec<PageSection> {
        if !self.page_sections.is_empty() {
            return self.page_sections.clone();
        }

        constants::page::DEFAULT_SECTION_SPANS
            .iter()
            .map(|span| PageSection {
                name: span.name.to_string(),
                top: span.top,
                height: span.height,
            })
            .collect()
    }
}
