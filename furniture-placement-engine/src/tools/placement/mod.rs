//! Furniture placement tool.
//!
//! A thin interactive layer over the document model: the panel binds
//! the two read-only catalogs (furniture types, levels) and the two
//! selection fields; the Place button runs the pick action; the click
//! systems turn a viewport click into an endpoint-snapped point; and
//! the completion system runs the placement transaction.
//!
//! State is deliberately small. The catalogs are snapshots taken at
//! seed time, the selection pair is the only mutable UI state, and the
//! armed pick lives exactly as long as one interaction cycle.

/// Panel button interaction systems.
pub mod interactions;

/// Pick action, viewport picking, and the placement transaction.
pub mod placement;

/// Endpoint snapping for picked points.
pub mod snap;

/// Resources, events, and UI marker components.
pub mod state;

/// Panel spawning and reactive display systems.
pub mod ui;

use bevy::prelude::*;

pub use placement::place_family_instance;
pub use state::{
    CloseRequest, InstancePlaced, PickCancelled, PlacementCatalogs, PlacementRequested,
    PlacementSelection, PointPickState, PointPicked,
};

use placement::{begin_placement, cancel_pick_on_escape, complete_placement, pick_point_on_click};

// Registers the placement panel, resources, and systems.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<state::PlacementSelection>()
            .init_resource::<state::PointPickState>()
            .init_resource::<state::PlacementPanelState>()
            .add_event::<PlacementRequested>()
            .add_event::<CloseRequest>()
            .add_event::<PointPicked>()
            .add_event::<PickCancelled>()
            .add_event::<InstancePlaced>()
            .add_systems(
                Update,
                (
                    begin_placement,
                    pick_point_on_click,
                    cancel_pick_on_escape,
                    complete_placement,
                )
                    .chain(),
            );

        // The selection panel is native-only UI.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(
                Update,
                (
                    ui::spawn_placement_panel,
                    ui::apply_panel_state,
                    ui::close_panel_on_request,
                    ui::reflect_selection_buttons,
                    ui::reflect_pick_label,
                    interactions::collapse_button_interaction,
                    interactions::family_type_button_interaction,
                    interactions::level_button_interaction,
                    interactions::pick_button_interaction,
                    interactions::toggle_panel_shortcut,
                ),
            );
        }
    }
}
