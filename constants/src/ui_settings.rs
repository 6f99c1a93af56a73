/// Selection panel width when expanded (pixels).
pub const PANEL_OPEN_WIDTH: f32 = 280.0;

/// Selection panel width when collapsed to the chevron strip (pixels).
pub const PANEL_CLOSED_WIDTH: f32 = 32.0;

/// Radius of the pick preview sphere shown at the cursor intersection.
pub const PICK_PREVIEW_SPHERE_SIZE: f32 = 0.125;

/// Half-extent of the reference plane spawned for each level (feet).
pub const LEVEL_PLANE_HALF_EXTENT: f32 = 60.0;

/// Thickness of the level reference plane slab (feet).
pub const LEVEL_PLANE_THICKNESS: f32 = 0.05;
