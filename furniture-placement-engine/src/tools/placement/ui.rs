use bevy::prelude::*;

use super::state::*;

// Shared panel palette.
pub(super) const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub(super) const BUTTON_HOVER: Color = Color::srgb(0.26, 0.28, 0.32);
pub(super) const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub(super) const BUTTON_SELECTED: Color = Color::srgb(0.18, 0.40, 0.24);

/// Spawns the selection panel once the catalogs exist: family type and
/// level button lists plus the Place button.
pub fn spawn_placement_panel(
    mut commands: Commands,
    catalogs: Option<Res<PlacementCatalogs>>,
    state: Res<PlacementPanelState>,
    existing: Query<(), With<PlacementPanelRoot>>,
) {
    let Some(catalogs) = catalogs else { return };
    if !existing.is_empty() {
        return;
    }

    let width = if state.collapsed {
        state.closed_width
    } else {
        state.open_width
    };
    let body_display = if state.collapsed {
        Display::None
    } else {
        Display::Flex
    };

    commands
        .spawn((
            PlacementPanelRoot,
            Name::new("PlacementPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            let (pad, btn) = if state.collapsed { (4.0, 24.0) } else { (12.0, 28.0) };

            parent
                .spawn((
                    HeaderNode,
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(pad)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed {
                            JustifyContent::FlexEnd
                        } else {
                            JustifyContent::SpaceBetween
                        },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        TitleText,
                        Name::new("Title"),
                        Text::new("Furniture Placement"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        Node {
                            display: if state.collapsed {
                                Display::None
                            } else {
                                Display::Flex
                            },
                            ..default()
                        },
                    ));

                    let chevron = if state.collapsed { ">" } else { "<" };
                    header
                        .spawn((
                            CollapseButton,
                            Name::new("CollapseButton"),
                            Button,
                            BackgroundColor(BUTTON_IDLE),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(btn),
                                height: Val::Px(btn),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn_parent| {
                            btn_parent.spawn((
                                CollapseLabel,
                                Text::new(chevron),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                });

            parent
                .spawn((
                    PanelBody,
                    Name::new("Body"),
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(6.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    spawn_section_label(body, "Family type");
                    for entry in &catalogs.family_types {
                        spawn_catalog_button(body, &entry.label, FamilyTypeButton(entry.id));
                    }

                    spawn_section_label(body, "Level");
                    for entry in &catalogs.levels {
                        spawn_catalog_button(body, &entry.label, LevelButton(entry.id));
                    }

                    // Place
                    body.spawn((
                        PickButton,
                        Button,
                        Name::new("PlaceButton"),
                        BackgroundColor(BUTTON_IDLE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(36.0),
                            margin: UiRect::top(Val::Px(10.0)),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            PickLabel,
                            Text::new("Place"),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });
                });
        });

    info!(
        "placement panel spawned: {} family types, {} levels",
        catalogs.family_types.len(),
        catalogs.levels.len()
    );
}

fn spawn_section_label(body: &mut ChildSpawnerCommands, text: &str) {
    body.spawn((
        Text::new(text),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.72, 0.76)),
        Node {
            margin: UiRect::top(Val::Px(6.0)),
            ..default()
        },
    ));
}

fn spawn_catalog_button(body: &mut ChildSpawnerCommands, label: &str, marker: impl Component) {
    body.spawn((
        marker,
        Button,
        BackgroundColor(BUTTON_IDLE),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(30.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));
    });
}

/// Apply visibility and collapse state to the panel nodes.
pub fn apply_panel_state(
    state: Res<PlacementPanelState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<PlacementPanelRoot>>,
        Query<&mut Node, With<PanelBody>>,
        Query<&mut Node, With<TitleText>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    if let Ok(mut n) = nodes.p0().single_mut() {
        if state.visible {
            n.display = Display::Flex;
            n.width = Val::Px(if state.collapsed {
                state.closed_width
            } else {
                state.open_width
            });
        } else {
            n.display = Display::None;
        }
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed {
            Display::None
        } else {
            Display::Flex
        };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        n.display = if state.collapsed {
            Display::None
        } else {
            Display::Flex
        };
    }
    for mut t in &mut chevrons {
        *t = Text::new(if state.collapsed { ">" } else { "<" });
    }
}

/// The completion signal dismisses the panel.
pub fn close_panel_on_request(
    mut close: EventReader<CloseRequest>,
    mut state: ResMut<PlacementPanelState>,
) {
    if close.read().next().is_some() {
        state.visible = false;
    }
}

/// Highlight the selected family type and level buttons.
pub fn reflect_selection_buttons(
    selection: Res<PlacementSelection>,
    mut family_buttons: Query<
        (&FamilyTypeButton, &mut BackgroundColor),
        Without<LevelButton>,
    >,
    mut level_buttons: Query<(&LevelButton, &mut BackgroundColor), Without<FamilyTypeButton>>,
) {
    if !selection.is_changed() {
        return;
    }
    for (button, mut bg) in &mut family_buttons {
        *bg = BackgroundColor(if selection.family_type == Some(button.0) {
            BUTTON_SELECTED
        } else {
            BUTTON_IDLE
        });
    }
    for (button, mut bg) in &mut level_buttons {
        *bg = BackgroundColor(if selection.level == Some(button.0) {
            BUTTON_SELECTED
        } else {
            BUTTON_IDLE
        });
    }
}

/// Keep the Place button label naming the selected type.
pub fn reflect_pick_label(
    selection: Res<PlacementSelection>,
    catalogs: Option<Res<PlacementCatalogs>>,
    mut labels: Query<&mut Text, With<PickLabel>>,
) {
    if labels.is_empty() {
        return;
    }
    let Some(catalogs) = catalogs else { return };

    let label = match selection.family_type.and_then(|id| catalogs.label_for(id)) {
        Some(name) => format!("Place ({name})"),
        None => "Place".to_string(),
    };

    if let Ok(mut t) = labels.single_mut() {
        if t.0 != label {
            *t = Text::new(label);
        }
    }
}
