//! In-process document model playing the host role for the placement
//! tool.
//!
//! The document owns every element: levels, family symbols (placeable
//! types), and family instances. Nothing outside the document holds an
//! element reference; collaborators keep `ElementId`s and re-resolve
//! them against the live document before acting.
//!
//! ## Mutation contract
//!
//! All mutation goes through a named [`Transaction`]:
//!
//! ```text
//! Transaction::start(&mut doc, "Place family instance")
//!   ├─> activate_family_symbol() / regenerate()
//!   ├─> create_family_instance()
//!   └─> commit()   (or drop, which rolls the document back)
//! ```
//!
//! A family symbol must be activated, and the document regenerated,
//! before its first instance is created in a session. Creation against
//! an inactive symbol or stale geometry is a `DocumentError`, never a
//! panic.

/// Element collector with class and category filters.
pub mod collector;

/// Element kinds, identity, and the document error taxonomy.
pub mod element;

/// The element store, lookups, and guarded mutation operations.
pub mod store;

/// Named, drop-guarded transactions with rollback.
pub mod transaction;

pub use collector::ElementCollector;
pub use element::{
    DocumentError, Element, ElementClass, ElementId, FamilyInstance, FamilySymbol, Level,
    StructuralType,
};
pub use store::Document;
pub use transaction::Transaction;
