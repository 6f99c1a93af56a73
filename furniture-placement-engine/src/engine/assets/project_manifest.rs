use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One vertical reference plane. Elevation in decimal feet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub elevation: f32,
}

/// One placeable furniture type: family and type names, a category
/// string resolved against the built-in category table, and the
/// footprint extents used for snapping and visuals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyDefinition {
    pub family: String,
    pub type_name: String,
    pub category: String,
    /// Width, height, depth in feet.
    pub footprint: [f32; 3],
}

/// Complete project manifest as a Bevy asset. Mirrors the JSON written
/// by the project-authoring CLI exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct ProjectManifest {
    pub project_name: String,
    pub levels: Vec<LevelDefinition>,
    pub furniture_families: Vec<FamilyDefinition>,
}

impl ProjectManifest {
    /// Count of families that will survive category resolution, for
    /// load-time reporting.
    pub fn furniture_family_count(&self) -> usize {
        self.furniture_families.len()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

/// Tracks the manifest load: started once, consumed once when the
/// asset arrives and the document is seeded.
#[derive(Resource, Default)]
pub struct ProjectLoader {
    pub handle: Option<Handle<ProjectManifest>>,
    pub seeded: bool,
}
