use bevy::prelude::*;
use constants::snap::ObjectSnapTypes;
use constants::ui_settings::{PANEL_CLOSED_WIDTH, PANEL_OPEN_WIDTH};

use crate::document::{Document, Element, ElementClass, ElementId};
use constants::category::BuiltInCategory;

// Resources

/// The two mutable selection fields bound to the panel. Unset until
/// the user picks entries; validated only when the action runs.
#[derive(Resource, Default)]
pub struct PlacementSelection {
    pub family_type: Option<ElementId>,
    pub level: Option<ElementId>,
}

/// One selectable catalog row: the element id plus a display label.
#[derive(Clone)]
pub struct CatalogEntry {
    pub id: ElementId,
    pub label: String,
}

/// Read-only snapshots of the furniture type and level catalogs, taken
/// once when the document is seeded and never refreshed.
#[derive(Resource, Clone)]
pub struct PlacementCatalogs {
    pub family_types: Vec<CatalogEntry>,
    pub levels: Vec<CatalogEntry>,
}

impl PlacementCatalogs {
    pub fn from_document(doc: &Document) -> Self {
        let family_types = doc
            .collector()
            .of_class(ElementClass::FamilySymbol)
            .of_category(BuiltInCategory::Furniture)
            .iter()
            .filter_map(|(id, element)| match element {
                Element::FamilySymbol(symbol) => Some(CatalogEntry {
                    id,
                    label: format!("{} : {}", symbol.family, symbol.name),
                }),
                _ => None,
            })
            .collect();

        let levels = doc
            .collector()
            .of_class(ElementClass::Level)
            .iter()
            .filter_map(|(id, element)| match element {
                Element::Level(level) => Some(CatalogEntry {
                    id,
                    label: level.name.clone(),
                }),
                _ => None,
            })
            .collect();

        Self {
            family_types,
            levels,
        }
    }

    pub fn label_for(&self, id: ElementId) -> Option<&str> {
        self.family_types
            .iter()
            .chain(self.levels.iter())
            .find(|entry| entry.id == id)
            .map(|entry| entry.label.as_str())
    }
}

/// An armed interactive point pick: the re-resolved selections plus
/// the snap mode and prompt for the pick. `None` when idle.
#[derive(Resource, Default)]
pub struct PointPickState {
    pub pending: Option<PendingPlacement>,
    /// True only on the frame the pick was armed. The click that fired
    /// the action must not double as the placement point.
    pub just_armed: bool,
}

pub struct PendingPlacement {
    pub symbol: ElementId,
    pub level: ElementId,
    pub snap: ObjectSnapTypes,
    pub prompt: String,
}

#[derive(Resource)]
pub struct PlacementPanelState {
    pub visible: bool,
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}

impl Default for PlacementPanelState {
    fn default() -> Self {
        Self {
            visible: true,
            collapsed: false,
            open_width: PANEL_OPEN_WIDTH,
            closed_width: PANEL_CLOSED_WIDTH,
        }
    }
}

// Events

/// The zero-argument pick action fired by the panel's Place button.
#[derive(Event)]
pub struct PlacementRequested;

/// Completion signal: dismiss the selection panel. Fired exactly once
/// per accepted request, strictly before the point pick happens.
#[derive(Event)]
pub struct CloseRequest;

/// The endpoint-snapped point the user picked in the viewport.
#[derive(Event)]
pub struct PointPicked(pub Vec3);

/// The user pressed Escape while a pick was armed.
#[derive(Event)]
pub struct PickCancelled;

/// A placement transaction committed. The id is announced and then
/// discarded; the document owns the instance.
#[derive(Event)]
pub struct InstancePlaced {
    pub instance: ElementId,
}

// Components

#[derive(Component)]
pub struct PlacementPanelRoot;
#[derive(Component)]
pub struct PanelBody;
#[derive(Component)]
pub struct HeaderNode;
#[derive(Component)]
pub struct TitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct FamilyTypeButton(pub ElementId);
#[derive(Component)]
pub struct LevelButton(pub ElementId);
#[derive(Component)]
pub struct PickButton;
#[derive(Component)]
pub struct PickLabel;
#[derive(Component)]
pub struct PickPreview;
