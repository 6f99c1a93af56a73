use bevy::prelude::*;

use super::state::*;
use super::ui::{BUTTON_HOVER, BUTTON_IDLE, BUTTON_PRESSED};

// Handles interactions for the placement panel buttons.
// Chevron icon toggles collapse state.
pub fn collapse_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CollapseButton>),
    >,
    mut state: ResMut<PlacementPanelState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                state.collapsed = !state.collapsed;
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

// Family type rows set the selected type; no validation until the
// action runs.
pub fn family_type_button_interaction(
    mut q: Query<(&Interaction, &FamilyTypeButton), (Changed<Interaction>, With<Button>)>,
    mut selection: ResMut<PlacementSelection>,
) {
    for (interaction, button) in &mut q {
        if *interaction == Interaction::Pressed {
            selection.family_type = Some(button.0);
            info!("selected family type {}", button.0);
        }
    }
}

pub fn level_button_interaction(
    mut q: Query<(&Interaction, &LevelButton), (Changed<Interaction>, With<Button>)>,
    mut selection: ResMut<PlacementSelection>,
) {
    for (interaction, button) in &mut q {
        if *interaction == Interaction::Pressed {
            selection.level = Some(button.0);
            info!("selected level {}", button.0);
        }
    }
}

// The Place button fires the zero-argument pick action.
pub fn pick_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<PickButton>),
    >,
    mut requests: EventWriter<PlacementRequested>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                requests.write(PlacementRequested);
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

/// Keyboard shortcut to re-open the panel after a placement dismissed
/// it (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_panel_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<PlacementPanelState>,
) {
    if keyboard.just_pressed(KeyCode::KeyF) {
        state.visible = !state.visible;
    }
}
