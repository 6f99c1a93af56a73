/// Project manifest schema and validation.
///
/// The engine crate deserialises the same JSON shape through its asset
/// loader; this tool owns an independent copy of the schema so it can
/// be built and run without the engine.
use constants::category::BuiltInCategory;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub elevation: f32,
}

#[derive(Serialize, Deserialize)]
pub struct FamilyDefinition {
    pub family: String,
    pub type_name: String,
    pub category: String,
    /// Footprint extents (width, height, depth) in feet.
    pub footprint: [f32; 3],
}

#[derive(Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project_name: String,
    pub levels: Vec<LevelDefinition>,
    pub furniture_families: Vec<FamilyDefinition>,
}

/// A two-level starter project with a small furniture catalog.
pub fn starter_manifest() -> ProjectManifest {
    ProjectManifest {
        project_name: "Starter Project".to_string(),
        levels: vec![
            LevelDefinition {
                name: "Level 1".to_string(),
                elevation: 0.0,
            },
            LevelDefinition {
                name: "Level 2".to_string(),
                elevation: 10.0,
            },
        ],
        furniture_families: vec![
            FamilyDefinition {
                family: "Chair".to_string(),
                type_name: "ChairA".to_string(),
                category: "furniture".to_string(),
                footprint: [2.0, 3.0, 2.0],
            },
            FamilyDefinition {
                family: "Table".to_string(),
                type_name: "TableB".to_string(),
                category: "furniture".to_string(),
                footprint: [4.0, 2.5, 3.0],
            },
            FamilyDefinition {
                family: "Sofa".to_string(),
                type_name: "Sofa 3-Seat".to_string(),
                category: "furniture".to_string(),
                footprint: [7.0, 2.8, 3.2],
            },
        ],
    }
}

/// Collect every problem rather than stopping at the first, so one run
/// reports the whole manifest.
pub fn validate_manifest(manifest: &ProjectManifest) -> Vec<String> {
    let mut problems = Vec::new();

    if manifest.levels.is_empty() {
        problems.push("manifest defines no levels".to_string());
    }

    for (index, level) in manifest.levels.iter().enumerate() {
        if level.name.trim().is_empty() {
            problems.push(format!("level {index} has an empty name"));
        }
        if !level.elevation.is_finite() {
            problems.push(format!(
                "level '{}' has a non-finite elevation",
                level.name
            ));
        }
        if manifest.levels[..index]
            .iter()
            .any(|earlier| earlier.name == level.name)
        {
            problems.push(format!("duplicate level name '{}'", level.name));
        }
    }

    for (index, family) in manifest.furniture_families.iter().enumerate() {
        if family.type_name.trim().is_empty() {
            problems.push(format!("family type {index} has an empty type name"));
        }
        if BuiltInCategory::from_name(&family.category).is_none() {
            problems.push(format!(
                "family type '{}' names unknown category '{}'",
                family.type_name, family.category
            ));
        }
        if family.footprint.iter().any(|extent| !extent.is_finite()) {
            problems.push(format!(
                "family type '{}' has a non-finite footprint",
                family.type_name
            ));
        }
        if family.footprint.iter().any(|extent| *extent <= 0.0) {
            problems.push(format!(
                "family type '{}' has a non-positive footprint extent",
                family.type_name
            ));
        }
        if manifest.furniture_families[..index]
            .iter()
            .any(|earlier| earlier.family == family.family && earlier.type_name == family.type_name)
        {
            problems.push(format!(
                "duplicate family type '{} : {}'",
                family.family, family.type_name
            ));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_manifest_is_valid() {
        assert!(validate_manifest(&starter_manifest()).is_empty());
    }

    #[test]
    fn duplicate_names_are_reported() {
        let mut manifest = starter_manifest();
        let name = manifest.levels[0].name.clone();
        manifest.levels.push(LevelDefinition {
            name,
            elevation: 20.0,
        });
        manifest.furniture_families.push(FamilyDefinition {
            family: "Chair".to_string(),
            type_name: "ChairA".to_string(),
            category: "furniture".to_string(),
            footprint: [1.0, 1.0, 1.0],
        });

        let report = validate_manifest(&manifest);
        assert_eq!(report.len(), 2);
        assert!(report[0].contains("duplicate level name"));
        assert!(report[1].contains("duplicate family type"));
    }

    #[test]
    fn bad_numbers_and_categories_are_reported() {
        let manifest = ProjectManifest {
            project_name: "broken".to_string(),
            levels: vec![LevelDefinition {
                name: "Roof".to_string(),
                elevation: f32::NAN,
            }],
            furniture_families: vec![FamilyDefinition {
                family: "Lamp".to_string(),
                type_name: "Floor Lamp".to_string(),
                category: "lighting".to_string(),
                footprint: [1.0, -6.0, 1.0],
            }],
        };

        let report = validate_manifest(&manifest);
        assert!(report.iter().any(|p| p.contains("non-finite elevation")));
        assert!(report.iter().any(|p| p.contains("unknown category")));
        assert!(report.iter().any(|p| p.contains("non-positive footprint")));
    }

    #[test]
    fn starter_manifest_round_trips_through_json() {
        let json = serde_json::to_string(&starter_manifest()).unwrap();
        let parsed: ProjectManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.levels.len(), 2);
        assert_eq!(parsed.furniture_families.len(), 3);
    }
}
