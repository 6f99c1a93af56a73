//! Headless exercise of the placement action flow: precondition
//! no-ops, close-before-pick ordering, cancellation, and the
//! activation contract across repeated placements.

use bevy::prelude::*;

use furniture_placement_engine::document::{Document, ElementClass, ElementId};
use furniture_placement_engine::engine::assets::project_manifest::{
    FamilyDefinition, LevelDefinition, ProjectManifest,
};
use furniture_placement_engine::tools::placement::placement::{
    begin_placement, cancel_pick_on_escape, complete_placement, pick_point_on_click,
};
use furniture_placement_engine::tools::placement::{
    CloseRequest, InstancePlaced, PickCancelled, PlacementCatalogs, PlacementRequested,
    PlacementSelection, PointPickState, PointPicked,
};

#[derive(Resource, Default)]
struct EventCounts {
    close: usize,
    cancelled: usize,
    placed: usize,
}

fn count_events(
    mut counts: ResMut<EventCounts>,
    mut close: EventReader<CloseRequest>,
    mut cancelled: EventReader<PickCancelled>,
    mut placed: EventReader<InstancePlaced>,
) {
    counts.close += close.read().count();
    counts.cancelled += cancelled.read().count();
    counts.placed += placed.read().count();
}

fn sample_manifest() -> ProjectManifest {
    ProjectManifest {
        project_name: "flow test".into(),
        levels: vec![
            LevelDefinition {
                name: "Level 1".into(),
                elevation: 0.0,
            },
            LevelDefinition {
                name: "Level 2".into(),
                elevation: 10.0,
            },
        ],
        furniture_families: vec![
            FamilyDefinition {
                family: "Chair".into(),
                type_name: "ChairA".into(),
                category: "furniture".into(),
                footprint: [2.0, 3.0, 2.0],
            },
            FamilyDefinition {
                family: "Table".into(),
                type_name: "TableB".into(),
                category: "furniture".into(),
                footprint: [4.0, 2.5, 3.0],
            },
        ],
    }
}

fn test_app(manifest: &ProjectManifest) -> App {
    let mut app = App::new();
    app.add_event::<PlacementRequested>()
        .add_event::<CloseRequest>()
        .add_event::<PointPicked>()
        .add_event::<PickCancelled>()
        .add_event::<InstancePlaced>()
        .init_resource::<PlacementSelection>()
        .init_resource::<PointPickState>()
        .init_resource::<EventCounts>()
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(Document::from_manifest(manifest))
        .add_systems(
            Update,
            (
                begin_placement,
                cancel_pick_on_escape,
                complete_placement,
                count_events,
            )
                .chain(),
        );
    app
}

/// Same harness with the viewport click system in its scheduled slot,
/// for exercising the arming-frame click guard.
fn test_app_with_click_system(manifest: &ProjectManifest) -> App {
    let mut app = App::new();
    app.add_event::<PlacementRequested>()
        .add_event::<CloseRequest>()
        .add_event::<PointPicked>()
        .add_event::<PickCancelled>()
        .add_event::<InstancePlaced>()
        .init_resource::<PlacementSelection>()
        .init_resource::<PointPickState>()
        .init_resource::<EventCounts>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<StandardMaterial>::default())
        .insert_resource(Document::from_manifest(manifest))
        .add_systems(
            Update,
            (
                begin_placement,
                pick_point_on_click,
                cancel_pick_on_escape,
                complete_placement,
                count_events,
            )
                .chain(),
        );
    app
}

fn furniture_type_ids(app: &App) -> Vec<ElementId> {
    PlacementCatalogs::from_document(app.world().resource::<Document>())
        .family_types
        .iter()
        .map(|entry| entry.id)
        .collect()
}

fn level_ids(app: &App) -> Vec<ElementId> {
    PlacementCatalogs::from_document(app.world().resource::<Document>())
        .levels
        .iter()
        .map(|entry| entry.id)
        .collect()
}

fn instance_count(app: &App) -> usize {
    app.world()
        .resource::<Document>()
        .collector()
        .of_class(ElementClass::FamilyInstance)
        .ids()
        .len()
}

fn set_selection(app: &mut App, family_type: Option<ElementId>, level: Option<ElementId>) {
    let mut selection = app.world_mut().resource_mut::<PlacementSelection>();
    selection.family_type = family_type;
    selection.level = level;
}

fn request_placement(app: &mut App) {
    app.world_mut().send_event(PlacementRequested);
    app.update();
}

fn pick_point(app: &mut App, point: Vec3) {
    app.world_mut().send_event(PointPicked(point));
    app.update();
}

fn counts(app: &App) -> (usize, usize, usize) {
    let counts = app.world().resource::<EventCounts>();
    (counts.close, counts.cancelled, counts.placed)
}

#[test]
fn missing_selection_is_a_silent_no_op() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let levels = level_ids(&app);

    // Nothing selected.
    request_placement(&mut app);
    // Level only.
    set_selection(&mut app, None, Some(levels[0]));
    request_placement(&mut app);

    let (close, _, placed) = counts(&app);
    assert_eq!(close, 0, "no close signal without a full selection");
    assert_eq!(placed, 0);
    assert_eq!(instance_count(&app), 0);
    assert!(
        app.world().resource::<PointPickState>().pending.is_none(),
        "no pick may be armed by an incomplete selection"
    );
}

#[test]
fn close_fires_exactly_once_and_before_the_pick() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let types = furniture_type_ids(&app);
    let levels = level_ids(&app);

    set_selection(&mut app, Some(types[0]), Some(levels[0]));
    request_placement(&mut app);

    let (close, _, placed) = counts(&app);
    assert_eq!(close, 1, "close request fires once per accepted action");
    assert_eq!(placed, 0, "nothing is created before the pick");
    assert_eq!(instance_count(&app), 0);
    assert!(app.world().resource::<PointPickState>().pending.is_some());

    pick_point(&mut app, Vec3::new(10.0, 5.0, 0.0));

    let (close, _, placed) = counts(&app);
    assert_eq!(close, 1, "the pick must not re-fire the close signal");
    assert_eq!(placed, 1);
    assert_eq!(instance_count(&app), 1);
}

#[test]
fn placement_creates_exactly_one_matching_instance() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let types = furniture_type_ids(&app);
    let levels = level_ids(&app);

    set_selection(&mut app, Some(types[0]), Some(levels[0]));
    request_placement(&mut app);
    pick_point(&mut app, Vec3::new(10.0, 5.0, 0.0));

    let doc = app.world().resource::<Document>();
    let instances = doc.collector().of_class(ElementClass::FamilyInstance).ids();
    assert_eq!(instances.len(), 1);

    let instance = doc.family_instance(instances[0]).unwrap();
    assert_eq!(instance.symbol, types[0]);
    assert_eq!(instance.level, levels[0]);
    assert_eq!(instance.location, Vec3::new(10.0, 5.0, 0.0));
    assert!(doc.family_symbol(types[0]).unwrap().is_active);
    assert!(doc.open_transaction().is_none());
}

#[test]
fn cancelled_pick_creates_nothing() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let types = furniture_type_ids(&app);
    let levels = level_ids(&app);

    set_selection(&mut app, Some(types[1]), Some(levels[1]));
    request_placement(&mut app);
    assert!(app.world().resource::<PointPickState>().pending.is_some());

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();

    let (close, cancelled, placed) = counts(&app);
    assert_eq!(close, 1);
    assert_eq!(cancelled, 1);
    assert_eq!(placed, 0);
    assert!(app.world().resource::<PointPickState>().pending.is_none());
    assert_eq!(instance_count(&app), 0);

    // A stray pick after cancellation carries no target.
    pick_point(&mut app, Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(instance_count(&app), 0);
}

#[test]
fn repeat_placement_skips_activation() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let types = furniture_type_ids(&app);
    let levels = level_ids(&app);

    set_selection(&mut app, Some(types[0]), Some(levels[0]));
    request_placement(&mut app);
    pick_point(&mut app, Vec3::new(2.0, 0.0, 2.0));

    assert!(
        app.world()
            .resource::<Document>()
            .family_symbol(types[0])
            .unwrap()
            .is_active
    );

    request_placement(&mut app);
    pick_point(&mut app, Vec3::new(6.0, 0.0, 2.0));

    let doc = app.world().resource::<Document>();
    assert_eq!(instance_count(&app), 2);
    assert!(
        !doc.geometry_stale(),
        "second placement must not leave a pending regeneration"
    );
}

#[test]
fn creation_failure_rolls_the_document_back() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let types = furniture_type_ids(&app);
    let levels = level_ids(&app);

    set_selection(&mut app, Some(types[0]), Some(levels[0]));
    request_placement(&mut app);
    pick_point(&mut app, Vec3::new(f32::NAN, 0.0, 0.0));

    let (_, _, placed) = counts(&app);
    assert_eq!(placed, 0);

    let doc = app.world().resource::<Document>();
    assert_eq!(instance_count(&app), 0);
    assert!(
        !doc.family_symbol(types[0]).unwrap().is_active,
        "activation inside the failed transaction must roll back"
    );
    assert!(doc.open_transaction().is_none());
}

#[test]
fn stale_type_selection_aborts_without_closing() {
    let manifest = sample_manifest();
    let mut app = test_app(&manifest);
    let levels = level_ids(&app);

    // A level id in the family-type slot fails re-resolution.
    set_selection(&mut app, Some(levels[0]), Some(levels[0]));
    request_placement(&mut app);

    let (close, _, placed) = counts(&app);
    assert_eq!(close, 0, "an aborted request must not dismiss the panel");
    assert_eq!(placed, 0);
    assert!(app.world().resource::<PointPickState>().pending.is_none());
    assert_eq!(instance_count(&app), 0);
}

#[test]
fn arming_click_does_not_double_as_the_pick() {
    let manifest = sample_manifest();
    let mut app = test_app_with_click_system(&manifest);
    let types = furniture_type_ids(&app);
    let levels = level_ids(&app);

    set_selection(&mut app, Some(types[0]), Some(levels[0]));

    // The Place button press leaves the left button just_pressed on
    // the same frame the request is processed.
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    request_placement(&mut app);

    let pick = app.world().resource::<PointPickState>();
    assert!(pick.pending.is_some(), "the pick must be armed");
    assert!(
        !pick.just_armed,
        "the click system consumes the arming marker"
    );
    let (close, _, placed) = counts(&app);
    assert_eq!(close, 1);
    assert_eq!(placed, 0, "no instance may appear without a real pick");
    assert_eq!(instance_count(&app), 0);
}

#[test]
fn empty_furniture_catalog_disables_the_action() {
    let manifest = ProjectManifest {
        project_name: "empty".into(),
        levels: vec![LevelDefinition {
            name: "Level 1".into(),
            elevation: 0.0,
        }],
        furniture_families: vec![],
    };
    let mut app = test_app(&manifest);

    let catalogs = PlacementCatalogs::from_document(app.world().resource::<Document>());
    assert!(catalogs.family_types.is_empty());
    assert_eq!(catalogs.levels.len(), 1);

    let levels = level_ids(&app);
    set_selection(&mut app, None, Some(levels[0]));
    request_placement(&mut app);

    let (close, _, placed) = counts(&app);
    assert_eq!(close, 0);
    assert_eq!(placed, 0);
    assert_eq!(instance_count(&app), 0);
}
