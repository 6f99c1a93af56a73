use bevy::asset::AssetMetaCheck;
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

use furniture_placement_engine::document::Document;
use furniture_placement_engine::engine::assets::project_manifest::{
    ProjectLoader, ProjectManifest,
};
use furniture_placement_engine::engine::camera::{ViewportCamera, camera_controller};
use furniture_placement_engine::engine::scene::{spawn_instance_visuals, spawn_level_planes};
use furniture_placement_engine::tools::placement::{PlacementCatalogs, PlacementPlugin};

const PROJECT_MANIFEST_PATH: &str = "projects/default_project.json";

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create application with the placement tool and project loading.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<ProjectManifest>::new(&["json"]))
        // Placed-instance visuals render as wireframe cuboids.
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        })
        .add_plugins(PlacementPlugin);

    app.init_resource::<ProjectLoader>()
        .init_resource::<ViewportCamera>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                load_project_system,
                camera_controller,
                spawn_level_planes,
                spawn_instance_visuals,
            ),
        );

    app
}

/// Load the project manifest JSON and seed the document and catalogs.
fn load_project_system(
    mut loader: ResMut<ProjectLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ProjectManifest>>,
) {
    // Start loading if not already started
    if loader.handle.is_none() {
        info!("loading project manifest: {}", PROJECT_MANIFEST_PATH);
        loader.handle = Some(asset_server.load(PROJECT_MANIFEST_PATH));
        return;
    }

    // Seed once when the asset arrives
    if !loader.seeded {
        if let Some(ref handle) = loader.handle {
            if let Some(manifest) = manifests.get(handle) {
                let doc = Document::from_manifest(manifest);
                commands.insert_resource(PlacementCatalogs::from_document(&doc));
                commands.insert_resource(doc);
                loader.seeded = true;
            }
        }
    }
}

fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 40.0, 60.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
