//! Viewport infrastructure: project asset loading, the orbit camera
//! with plane picking, and scene visuals for levels and placed
//! furniture.

/// Project manifest asset types and the document seeding loader.
pub mod assets;

/// Orbit/pan/dolly camera and viewport-ray plane intersection.
pub mod camera;

/// Level reference planes and placed-instance wireframe visuals.
pub mod scene;
