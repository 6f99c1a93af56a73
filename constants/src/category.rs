/// Built-in categories recognised by the document model.
///
/// Categories scope type catalogs: the placement tool only offers
/// family symbols from the furniture category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInCategory {
    Furniture,
    Casework,
    Planting,
    GenericModel,
}

pub struct CategoryInfo {
    pub category: BuiltInCategory,
    pub name: &'static str,
}

pub const CATEGORY_MAP: &[CategoryInfo] = &[
    CategoryInfo {
        category: BuiltInCategory::Furniture,
        name: "furniture",
    },
    CategoryInfo {
        category: BuiltInCategory::Casework,
        name: "casework",
    },
    CategoryInfo {
        category: BuiltInCategory::Planting,
        name: "planting",
    },
    CategoryInfo {
        category: BuiltInCategory::GenericModel,
        name: "generic model",
    },
];

impl BuiltInCategory {
    pub fn name(self) -> &'static str {
        CATEGORY_MAP
            .iter()
            .find(|c| c.category == self)
            .map_or("unknown", |c| c.name)
    }

    /// Parse a manifest category string, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        CATEGORY_MAP
            .iter()
            .find(|c| c.name == lower)
            .map(|c| c.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for info in CATEGORY_MAP {
            assert_eq!(BuiltInCategory::from_name(info.name), Some(info.category));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(BuiltInCategory::from_name("structural framing"), None);
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(
            BuiltInCategory::from_name("Furniture"),
            Some(BuiltInCategory::Furniture)
        );
    }
}
