use constants::category::BuiltInCategory;

use super::element::{Element, ElementClass, ElementId};
use super::store::Document;

/// Filtered enumeration over the document's elements. Filters narrow,
/// never sort: results come back in the document's own id order.
pub struct ElementCollector<'doc> {
    doc: &'doc Document,
    class: Option<ElementClass>,
    category: Option<BuiltInCategory>,
}

impl<'doc> ElementCollector<'doc> {
    pub(crate) fn new(doc: &'doc Document) -> Self {
        Self {
            doc,
            class: None,
            category: None,
        }
    }

    pub fn of_class(mut self, class: ElementClass) -> Self {
        self.class = Some(class);
        self
    }

    pub fn of_category(mut self, category: BuiltInCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &'doc Element)> + '_ {
        let class = self.class;
        let category = self.category;
        self.doc.elements().filter(move |(_, element)| {
            if let Some(class) = class {
                if element.class() != class {
                    return false;
                }
            }
            if let Some(category) = category {
                if element.category() != Some(category) {
                    return false;
                }
            }
            true
        })
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.iter().map(|(id, _)| id).collect()
    }
}
