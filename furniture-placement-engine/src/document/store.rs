use std::collections::BTreeMap;

use bevy::prelude::*;
use constants::category::BuiltInCategory;

use crate::engine::assets::project_manifest::ProjectManifest;

use super::collector::ElementCollector;
use super::element::{
    DocumentError, Element, ElementClass, ElementId, FamilyInstance, FamilySymbol, Level,
    StructuralType,
};

/// Snapshot of everything a transaction can touch, captured at
/// `Transaction::start` and restored on rollback.
#[derive(Clone)]
pub(crate) struct DocumentSnapshot {
    elements: BTreeMap<ElementId, Element>,
    next_id: u32,
    geometry_stale: bool,
}

/// The element store. Insertion order is id order, so enumeration is
/// stable and unsorted, matching the host's collector behaviour.
#[derive(Resource, Clone)]
pub struct Document {
    elements: BTreeMap<ElementId, Element>,
    next_id: u32,
    /// Name of the currently open transaction, if any.
    open_transaction: Option<String>,
    /// Set by symbol activation, cleared by `regenerate`. Instance
    /// creation refuses to run while derived geometry is stale.
    geometry_stale: bool,
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            next_id: 1,
            open_transaction: None,
            geometry_stale: false,
        }
    }

    /// Seed a document from a project manifest: one level element per
    /// definition, one inactive furniture symbol per family entry.
    /// Malformed entries are logged and skipped rather than failing the
    /// whole load.
    pub fn from_manifest(manifest: &ProjectManifest) -> Self {
        let mut doc = Self::new();

        for level in &manifest.levels {
            if !level.elevation.is_finite() {
                warn!("skipping level '{}': non-finite elevation", level.name);
                continue;
            }
            doc.insert(Element::Level(Level {
                name: level.name.clone(),
                elevation: level.elevation,
            }));
        }

        for family in &manifest.furniture_families {
            let Some(category) = BuiltInCategory::from_name(&family.category) else {
                warn!(
                    "skipping family type '{}': unknown category '{}'",
                    family.type_name, family.category
                );
                continue;
            };
            doc.insert(Element::FamilySymbol(FamilySymbol {
                family: family.family.clone(),
                name: family.type_name.clone(),
                category,
                footprint: Vec3::from_array(family.footprint),
                is_active: false,
            }));
        }

        info!(
            "seeded document '{}': {} levels, {} family symbols",
            manifest.project_name,
            doc.collector().of_class(ElementClass::Level).ids().len(),
            doc.collector()
                .of_class(ElementClass::FamilySymbol)
                .ids()
                .len(),
        );
        doc
    }

    /// Direct insertion used by seeding. Runtime mutation goes through
    /// the transaction-guarded operations below.
    pub(crate) fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, element);
        id
    }

    pub fn collector(&self) -> ElementCollector<'_> {
        ElementCollector::new(self)
    }

    pub(crate) fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    pub fn element(&self, id: ElementId) -> Result<&Element, DocumentError> {
        self.elements
            .get(&id)
            .ok_or(DocumentError::ElementNotFound(id))
    }

    pub fn level(&self, id: ElementId) -> Result<&Level, DocumentError> {
        match self.element(id)? {
            Element::Level(level) => Ok(level),
            _ => Err(DocumentError::WrongClass {
                id,
                expected: ElementClass::Level,
            }),
        }
    }

    pub fn family_symbol(&self, id: ElementId) -> Result<&FamilySymbol, DocumentError> {
        match self.element(id)? {
            Element::FamilySymbol(symbol) => Ok(symbol),
            _ => Err(DocumentError::WrongClass {
                id,
                expected: ElementClass::FamilySymbol,
            }),
        }
    }

    pub fn family_instance(&self, id: ElementId) -> Result<&FamilyInstance, DocumentError> {
        match self.element(id)? {
            Element::FamilyInstance(instance) => Ok(instance),
            _ => Err(DocumentError::WrongClass {
                id,
                expected: ElementClass::FamilyInstance,
            }),
        }
    }

    // --- transaction bookkeeping, used by `Transaction` ---

    /// Name of the currently open transaction, if any.
    pub fn open_transaction(&self) -> Option<&str> {
        self.open_transaction.as_deref()
    }

    pub(crate) fn begin_transaction(&mut self, name: &str) -> Result<DocumentSnapshot, DocumentError> {
        if let Some(open) = &self.open_transaction {
            return Err(DocumentError::TransactionAlreadyOpen(open.clone()));
        }
        self.open_transaction = Some(name.to_string());
        Ok(DocumentSnapshot {
            elements: self.elements.clone(),
            next_id: self.next_id,
            geometry_stale: self.geometry_stale,
        })
    }

    pub(crate) fn end_transaction(&mut self) {
        self.open_transaction = None;
    }

    pub(crate) fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.elements = snapshot.elements;
        self.next_id = snapshot.next_id;
        self.geometry_stale = snapshot.geometry_stale;
    }

    fn require_transaction(&self) -> Result<(), DocumentError> {
        if self.open_transaction.is_none() {
            return Err(DocumentError::TransactionNotOpen);
        }
        Ok(())
    }

    // --- guarded mutation operations ---

    /// Mark a symbol usable for instantiation. Derived geometry becomes
    /// stale until the next `regenerate`.
    pub fn activate_family_symbol(&mut self, id: ElementId) -> Result<(), DocumentError> {
        self.require_transaction()?;
        self.family_symbol(id)?;
        if let Some(Element::FamilySymbol(symbol)) = self.elements.get_mut(&id) {
            symbol.is_active = true;
        }
        self.geometry_stale = true;
        info!("activated family symbol {id}");
        Ok(())
    }

    /// Rebuild derived geometry after activation.
    pub fn regenerate(&mut self) -> Result<(), DocumentError> {
        self.require_transaction()?;
        self.geometry_stale = false;
        Ok(())
    }

    pub fn geometry_stale(&self) -> bool {
        self.geometry_stale
    }

    /// Create one instance of `symbol` at `point` on `level`. The
    /// symbol must already be active and geometry regenerated.
    pub fn create_family_instance(
        &mut self,
        point: Vec3,
        symbol: ElementId,
        level: ElementId,
        structural: StructuralType,
    ) -> Result<ElementId, DocumentError> {
        self.require_transaction()?;
        if !point.is_finite() {
            return Err(DocumentError::InvalidPlacementPoint);
        }
        let symbol_ref = self.family_symbol(symbol)?;
        if !symbol_ref.is_active {
            return Err(DocumentError::SymbolNotActive(symbol));
        }
        let category = symbol_ref.category;
        self.level(level)?;
        if self.geometry_stale {
            return Err(DocumentError::GeometryStale);
        }

        let id = self.insert(Element::FamilyInstance(FamilyInstance {
            symbol,
            level,
            location: point,
            structural,
            category,
        }));
        Ok(id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Transaction;

    fn furnished_document() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let level = doc.insert(Element::Level(Level {
            name: "Level 1".into(),
            elevation: 0.0,
        }));
        let symbol = doc.insert(Element::FamilySymbol(FamilySymbol {
            family: "Chair".into(),
            name: "ChairA".into(),
            category: BuiltInCategory::Furniture,
            footprint: Vec3::new(2.0, 3.0, 2.0),
            is_active: false,
        }));
        (doc, level, symbol)
    }

    #[test]
    fn lookups_resolve_by_class() {
        let (doc, level, symbol) = furnished_document();
        assert_eq!(doc.level(level).unwrap().name, "Level 1");
        assert_eq!(doc.family_symbol(symbol).unwrap().name, "ChairA");
        assert_eq!(
            doc.level(symbol),
            Err(DocumentError::WrongClass {
                id: symbol,
                expected: ElementClass::Level,
            })
        );
    }

    #[test]
    fn mutation_requires_open_transaction() {
        let (mut doc, level, symbol) = furnished_document();
        assert_eq!(
            doc.activate_family_symbol(symbol),
            Err(DocumentError::TransactionNotOpen)
        );
        assert_eq!(
            doc.create_family_instance(
                Vec3::ZERO,
                symbol,
                level,
                StructuralType::NonStructural
            ),
            Err(DocumentError::TransactionNotOpen)
        );
    }

    #[test]
    fn creation_requires_activation_and_regeneration() {
        let (mut doc, level, symbol) = furnished_document();
        let mut txn = Transaction::start(&mut doc, "activation contract").unwrap();

        let inactive = txn.document().create_family_instance(
            Vec3::ZERO,
            symbol,
            level,
            StructuralType::NonStructural,
        );
        assert_eq!(inactive, Err(DocumentError::SymbolNotActive(symbol)));

        txn.document().activate_family_symbol(symbol).unwrap();
        let stale = txn.document().create_family_instance(
            Vec3::ZERO,
            symbol,
            level,
            StructuralType::NonStructural,
        );
        assert_eq!(stale, Err(DocumentError::GeometryStale));

        txn.document().regenerate().unwrap();
        let id = txn
            .document()
            .create_family_instance(
                Vec3::new(10.0, 5.0, 0.0),
                symbol,
                level,
                StructuralType::NonStructural,
            )
            .unwrap();
        txn.commit();

        let instance = doc.family_instance(id).unwrap();
        assert_eq!(instance.symbol, symbol);
        assert_eq!(instance.level, level);
        assert_eq!(instance.location, Vec3::new(10.0, 5.0, 0.0));
        assert_eq!(instance.structural, StructuralType::NonStructural);
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let (mut doc, level, symbol) = furnished_document();
        let mut txn = Transaction::start(&mut doc, "bad point").unwrap();
        txn.document().activate_family_symbol(symbol).unwrap();
        txn.document().regenerate().unwrap();
        let result = txn.document().create_family_instance(
            Vec3::new(f32::NAN, 0.0, 0.0),
            symbol,
            level,
            StructuralType::NonStructural,
        );
        assert_eq!(result, Err(DocumentError::InvalidPlacementPoint));
    }
}
