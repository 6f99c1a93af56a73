//! Interactive tools for furnishing the placement scene.
//!
//! One tool ships today: furniture placement. It mediates between the
//! selection panel and the transacted document model.
//!
//! ## Placement Flow
//!
//! ```text
//! Pick button
//!   └─> PlacementRequested
//!       └─> begin_placement()
//!           ├─> silent no-op unless both selections are set
//!           ├─> re-resolve both ids against the live document
//!           ├─> CloseRequest        (panel dismissed *before* the pick)
//!           └─> arm the point pick with endpoint snapping
//! Left click in the viewport
//!   └─> PointPicked (plane intersection, endpoint-snapped)
//!       └─> complete_placement()
//!           ├─> Transaction::start "Place family instance"
//!           ├─> activate symbol + regenerate (first use only)
//!           ├─> create one non-structural instance
//!           └─> commit (failures roll back and are logged)
//! Escape
//!   └─> PickCancelled (nothing opened, nothing created)
//! ```
//!
//! The close-before-pick ordering is a contract: the selection panel
//! must be out of the way while the user chooses a point.

/// Furniture placement tool: selection state, pick action, panel UI.
pub mod placement;
