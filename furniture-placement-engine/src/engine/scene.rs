use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;
use bevy::render::alpha::AlphaMode;

use constants::ui_settings::{LEVEL_PLANE_HALF_EXTENT, LEVEL_PLANE_THICKNESS};

use crate::document::{Document, Element, ElementClass};
use crate::tools::placement::state::InstancePlaced;

#[derive(Component)]
pub struct LevelPlane;

#[derive(Component)]
pub struct PlacedInstanceVisual;

/// Spawn one translucent reference slab per level once the document is
/// seeded. Runs until the planes exist, then becomes a no-op.
pub fn spawn_level_planes(
    mut commands: Commands,
    doc: Option<Res<Document>>,
    existing: Query<(), With<LevelPlane>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(doc) = doc else { return };
    if !existing.is_empty() {
        return;
    }

    let extent = LEVEL_PLANE_HALF_EXTENT * 2.0;
    let mesh = meshes.add(Cuboid::new(extent, LEVEL_PLANE_THICKNESS, extent));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.35, 0.45, 0.60, 0.12),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    for (id, element) in doc.collector().of_class(ElementClass::Level).iter() {
        let Element::Level(level) = element else {
            continue;
        };
        commands.spawn((
            LevelPlane,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, level.elevation, 0.0),
            Name::new(format!("{}_plane", level.name)),
        ));
        info!("spawned reference plane for '{}' ({})", level.name, id);
    }
}

/// Spawn a wireframe footprint cuboid for each committed placement.
pub fn spawn_instance_visuals(
    mut placed: EventReader<InstancePlaced>,
    doc: Option<Res<Document>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(doc) = doc else { return };

    for event in placed.read() {
        let Ok(instance) = doc.family_instance(event.instance) else {
            continue;
        };
        let Ok(symbol) = doc.family_symbol(instance.symbol) else {
            continue;
        };

        let size = symbol.footprint.max(Vec3::splat(0.001));
        // Centre the cuboid so it sits flat on the placement point.
        let center = instance.location + Vec3::Y * (size.y * 0.5);

        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.0, 0.0, 0.0),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });

        commands.spawn((
            PlacedInstanceVisual,
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(material),
            Transform::from_translation(center),
            Wireframe,
            WireframeColor {
                color: Color::WHITE,
            },
            Name::new(format!("{}_{}", symbol.name, event.instance)),
        ));
    }
}
