use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::snap::{ENDPOINT_SNAP_RADIUS, ObjectSnapTypes};
use constants::ui_settings::PICK_PREVIEW_SPHERE_SIZE;

use crate::document::{Document, DocumentError, ElementId, StructuralType, Transaction};
use crate::engine::camera::ViewportCamera;

use super::snap::{endpoint_candidates, snap_to_endpoints};
use super::state::*;

/// Handle the pick action: validate the selection pair, re-resolve it
/// against the live document, dismiss the panel, and arm the point
/// pick. Missing selections are a silent no-op.
pub fn begin_placement(
    mut requests: EventReader<PlacementRequested>,
    selection: Res<PlacementSelection>,
    doc: Option<Res<Document>>,
    mut close: EventWriter<CloseRequest>,
    mut pick: ResMut<PointPickState>,
) {
    for _ in requests.read() {
        let (Some(symbol), Some(level)) = (selection.family_type, selection.level) else {
            continue;
        };
        let Some(doc) = doc.as_ref() else {
            continue;
        };

        // Re-resolve both ids before acting; the document may have
        // changed since the catalogs were snapshotted.
        if let Err(err) = doc.family_symbol(symbol) {
            warn!("stale family type selection, ignoring request: {err}");
            continue;
        }
        if let Err(err) = doc.level(level) {
            warn!("stale level selection, ignoring request: {err}");
            continue;
        }

        // Dismiss the panel first so the viewport is unobstructed
        // while the user picks. Ordering here is a contract.
        close.write(CloseRequest);
        pick.pending = Some(PendingPlacement {
            symbol,
            level,
            snap: ObjectSnapTypes::Endpoints,
            prompt: "Pick a placement point".to_string(),
        });
        pick.just_armed = true;
        info!("point pick armed for symbol {symbol} on level {level}");
    }
}

/// While a pick is armed: intersect the cursor with the target level's
/// elevation plane, show a preview sphere at the (snapped) point, and
/// emit `PointPicked` on left click.
pub fn pick_point_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    mut pick_state: ResMut<PointPickState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    viewport_camera: Option<Res<ViewportCamera>>,
    doc: Option<Res<Document>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut picked: EventWriter<PointPicked>,
    existing_preview: Query<Entity, With<PickPreview>>,
) {
    // Preview entities live for one frame.
    for entity in existing_preview.iter() {
        commands.entity(entity).despawn();
    }

    // The click that pressed the Place button is still just_pressed on
    // the arming frame; picking starts on the next one.
    if pick_state.just_armed {
        pick_state.just_armed = false;
        return;
    }
    let Some(pending) = pick_state.pending.as_ref() else {
        return;
    };
    let Some(doc) = doc else { return };
    let Some(viewport_camera) = viewport_camera else {
        return;
    };
    let Ok(window) = windows.single() else { return };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Ok(level) = doc.level(pending.level) else {
        return;
    };

    let hit = viewport_camera.mouse_to_plane(cursor_pos, camera, cam_xf, level.elevation);
    let Some(hit) = hit else { return };

    let point = match pending.snap {
        ObjectSnapTypes::Endpoints => snap_to_endpoints(
            hit,
            &endpoint_candidates(&doc, pending.level),
            ENDPOINT_SNAP_RADIUS,
        ),
        ObjectSnapTypes::None => hit,
    };

    commands.spawn((
        PickPreview,
        Mesh3d(meshes.add(Sphere::new(PICK_PREVIEW_SPHERE_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::hsv(0.0, 1.0, 1.0),
            emissive: LinearRgba::new(1.0, 1.0, 1.0, 1.0),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(point),
        Name::new("PickPreview"),
    ));

    if buttons.just_pressed(MouseButton::Left) {
        // `pending` stays armed; complete_placement consumes it along
        // with the event later this frame.
        picked.write(PointPicked(point));
    }
}

/// Escape disarms the pick before any transaction exists.
pub fn cancel_pick_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pick: ResMut<PointPickState>,
    mut cancelled: EventWriter<PickCancelled>,
) {
    if pick.pending.is_some() && keyboard.just_pressed(KeyCode::Escape) {
        pick.pending = None;
        pick.just_armed = false;
        cancelled.write(PickCancelled);
        info!("point pick cancelled");
    }
}

/// Consume picked points: run the placement transaction and announce
/// the created instance. A failure is logged after the drop guard has
/// rolled the document back.
pub fn complete_placement(
    mut picked: EventReader<PointPicked>,
    doc: Option<ResMut<Document>>,
    mut placed: EventWriter<InstancePlaced>,
    mut pick: ResMut<PointPickState>,
) {
    let Some(mut doc) = doc else { return };

    for PointPicked(point) in picked.read() {
        // A PointPicked without an armed pick carries no target; drop it.
        let Some(pending) = pick.pending.take() else {
            continue;
        };
        pick.just_armed = false;

        match place_family_instance(&mut doc, pending.symbol, pending.level, *point) {
            Ok(instance) => {
                info!("placed instance {instance} at {point}");
                placed.write(InstancePlaced { instance });
            }
            Err(err) => error!("placement failed, document rolled back: {err}"),
        }
    }
}

/// Open the named transaction, activate the symbol on first use (with
/// a regeneration), create one non-structural instance, and commit.
/// Any error propagates only after the transaction guard has restored
/// the document.
pub fn place_family_instance(
    doc: &mut Document,
    symbol: ElementId,
    level: ElementId,
    point: Vec3,
) -> Result<ElementId, DocumentError> {
    let mut txn = Transaction::start(doc, "Place family instance")?;

    if !txn.document().family_symbol(symbol)?.is_active {
        txn.document().activate_family_symbol(symbol)?;
        txn.document().regenerate()?;
    }

    let instance = txn.document().create_family_instance(
        point,
        symbol,
        level,
        StructuralType::NonStructural,
    )?;
    txn.commit();
    Ok(instance)
}
