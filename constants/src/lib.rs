/// Built-in element categories with display names and lookup.
pub mod category;

/// Object snap modes and snapping tolerances for interactive picking.
pub mod snap;

/// UI panel geometry and viewport gizmo sizes.
pub mod ui_settings;

/// Internal length units (decimal feet) and metric conversions.
pub mod units;
