use bevy::prelude::*;
use constants::category::BuiltInCategory;
use thiserror::Error;

/// Opaque element identity. Ids are document-scoped and never reused;
/// holding one across document changes is safe because every use is a
/// fresh lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Class tag used by the collector's `of_class` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    Level,
    FamilySymbol,
    FamilyInstance,
}

/// Vertical reference plane. Elevation is in decimal feet.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub elevation: f32,
}

/// A placeable type: one named variant of a family, scoped to a
/// category. Symbols start inactive and must be activated (with a
/// regeneration) before their first instance is created.
#[derive(Debug, Clone)]
pub struct FamilySymbol {
    pub family: String,
    pub name: String,
    pub category: BuiltInCategory,
    /// Footprint extents (width, height, depth) in feet, used for
    /// endpoint snapping and the placed-instance visual.
    pub footprint: Vec3,
    pub is_active: bool,
}

/// Structural classification recorded on created instances. Furniture
/// placement always uses `NonStructural`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructuralType {
    #[default]
    NonStructural,
    Structural,
}

/// A placed object. The document owns it outright; the placement tool
/// discards the returned id after announcing it.
#[derive(Debug, Clone)]
pub struct FamilyInstance {
    pub symbol: ElementId,
    pub level: ElementId,
    pub location: Vec3,
    pub structural: StructuralType,
    pub category: BuiltInCategory,
}

/// Any element the document can store.
#[derive(Debug, Clone)]
pub enum Element {
    Level(Level),
    FamilySymbol(FamilySymbol),
    FamilyInstance(FamilyInstance),
}

impl Element {
    pub fn class(&self) -> ElementClass {
        match self {
            Element::Level(_) => ElementClass::Level,
            Element::FamilySymbol(_) => ElementClass::FamilySymbol,
            Element::FamilyInstance(_) => ElementClass::FamilyInstance,
        }
    }

    /// Category for filtering. Levels carry no category and never match
    /// an `of_category` filter.
    pub fn category(&self) -> Option<BuiltInCategory> {
        match self {
            Element::Level(_) => None,
            Element::FamilySymbol(symbol) => Some(symbol.category),
            Element::FamilyInstance(instance) => Some(instance.category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("element {0} not found in document")]
    ElementNotFound(ElementId),
    #[error("element {id} is not a {expected:?}")]
    WrongClass {
        id: ElementId,
        expected: ElementClass,
    },
    #[error("no transaction is open")]
    TransactionNotOpen,
    #[error("transaction '{0}' is already open")]
    TransactionAlreadyOpen(String),
    #[error("family symbol {0} is not active")]
    SymbolNotActive(ElementId),
    #[error("document geometry is stale; regenerate before creating instances")]
    GeometryStale,
    #[error("placement point is not finite")]
    InvalidPlacementPoint,
}
