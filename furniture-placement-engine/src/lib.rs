//! Interactive furniture placement over a transacted document model.
//!
//! The engine hosts three layers:
//!
//! - [`document`]: the element store playing the host role: levels,
//!   family symbols, instances, and named transactions with rollback.
//! - [`engine`]: viewport infrastructure: project manifest loading,
//!   the orbit camera with plane picking, and scene visuals.
//! - [`tools`]: the placement tool: catalogs, selection state, the
//!   pick action, and the panel UI.

pub mod document;
pub mod engine;
pub mod tools;
