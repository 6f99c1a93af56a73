/// Project manifest JSON structures and loading state.
pub mod project_manifest;
