use bevy::prelude::*;

use crate::document::{Document, Element, ElementClass, ElementId};

/// Endpoint candidates for snapping on one level: the footprint
/// corners of every instance already placed there.
pub fn endpoint_candidates(doc: &Document, level: ElementId) -> Vec<Vec3> {
    let mut candidates = Vec::new();

    for (_, element) in doc
        .collector()
        .of_class(ElementClass::FamilyInstance)
        .iter()
    {
        let Element::FamilyInstance(instance) = element else {
            continue;
        };
        if instance.level != level {
            continue;
        }
        let Ok(symbol) = doc.family_symbol(instance.symbol) else {
            continue;
        };

        let half = symbol.footprint * 0.5;
        let base = instance.location;
        for sx in [-1.0f32, 1.0] {
            for sz in [-1.0f32, 1.0] {
                for y in [0.0, symbol.footprint.y] {
                    candidates.push(base + Vec3::new(half.x * sx, y, half.z * sz));
                }
            }
        }
    }

    candidates
}

/// Snap `point` to the nearest candidate within `radius`, or return it
/// unchanged when nothing is in range.
pub fn snap_to_endpoints(point: Vec3, candidates: &[Vec3], radius: f32) -> Vec3 {
    let mut best: Option<(f32, Vec3)> = None;
    for candidate in candidates {
        let distance = candidate.distance(point);
        if distance <= radius && best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, *candidate));
        }
    }
    best.map_or(point, |(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FamilyInstance, FamilySymbol, Level, StructuralType};
    use constants::category::BuiltInCategory;

    fn two_level_scene() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let level_one = doc.insert(Element::Level(Level {
            name: "Level 1".into(),
            elevation: 0.0,
        }));
        let level_two = doc.insert(Element::Level(Level {
            name: "Level 2".into(),
            elevation: 10.0,
        }));
        let symbol = doc.insert(Element::FamilySymbol(FamilySymbol {
            family: "Table".into(),
            name: "TableB".into(),
            category: BuiltInCategory::Furniture,
            footprint: Vec3::new(4.0, 2.0, 2.0),
            is_active: true,
        }));
        doc.insert(Element::FamilyInstance(FamilyInstance {
            symbol,
            level: level_one,
            location: Vec3::new(10.0, 0.0, 6.0),
            structural: StructuralType::NonStructural,
            category: BuiltInCategory::Furniture,
        }));
        doc.insert(Element::FamilyInstance(FamilyInstance {
            symbol,
            level: level_two,
            location: Vec3::ZERO,
            structural: StructuralType::NonStructural,
            category: BuiltInCategory::Furniture,
        }));
        (doc, level_one, level_two)
    }

    #[test]
    fn candidates_cover_the_footprint_corners() {
        let (doc, level_one, _) = two_level_scene();
        let candidates = endpoint_candidates(&doc, level_one);

        assert_eq!(candidates.len(), 8);
        // Base corner: location + (half width, 0, half depth).
        assert!(candidates.contains(&Vec3::new(12.0, 0.0, 7.0)));
        // Opposite top corner: location + (-half width, height, -half depth).
        assert!(candidates.contains(&Vec3::new(8.0, 2.0, 5.0)));
    }

    #[test]
    fn candidates_come_only_from_the_target_level() {
        let (doc, level_one, level_two) = two_level_scene();

        let upper = endpoint_candidates(&doc, level_two);
        assert_eq!(upper.len(), 8);
        assert!(upper.contains(&Vec3::new(2.0, 0.0, 1.0)));
        // Nothing from the lower level's instance leaks in.
        assert!(!upper.contains(&Vec3::new(12.0, 0.0, 7.0)));

        let lower = endpoint_candidates(&doc, level_one);
        assert!(!lower.contains(&Vec3::new(2.0, 0.0, 1.0)));
    }

    #[test]
    fn far_points_pass_through_unsnapped() {
        let candidates = vec![Vec3::ZERO];
        let point = Vec3::new(5.0, 0.0, 0.0);
        assert_eq!(snap_to_endpoints(point, &candidates, 1.0), point);
    }

    #[test]
    fn nearest_candidate_wins() {
        let near = Vec3::new(0.4, 0.0, 0.0);
        let nearer = Vec3::new(0.2, 0.0, 0.0);
        let snapped = snap_to_endpoints(Vec3::ZERO, &[near, nearer], 1.0);
        assert_eq!(snapped, nearer);
    }

    #[test]
    fn empty_candidate_set_is_identity() {
        let point = Vec3::new(10.0, 5.0, 0.0);
        assert_eq!(snap_to_endpoints(point, &[], 1.0), point);
    }
}
