//! Catalog of predefined sellable items.
//!
//! Static product list the UI offers when composing an invoice or
//! quotation: cotton and medical supplies with a default unit price that
//! pre-fills the line item. Prices are stored in paise so the table can be
//! a plain static.

use rust_decimal::Decimal;

/// One predefined catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable identifier, e.g. "surgical-cotton-rolls".
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Default unit price in paise (1/100 rupee).
    pub default_unit_price_paise: i64,
}

impl CatalogItem {
    /// Default unit price in rupees.
    pub fn default_unit_price(&self) -> Decimal {
        Decimal::new(self.default_unit_price_paise, 2)
    }
}

/// Item categories, in display order.
pub static CATEGORIES: &[&str] = &[
    "Surgical Cotton",
    "Medical Supplies",
    "Cotton Products",
    "Industrial Cotton",
];

/// The predefined product list.
pub static PREDEFINED_ITEMS: &[CatalogItem] = &[
    // Surgical cotton
    CatalogItem {
        id: "surgical-cotton-rolls",
        name: "Surgical Cotton Rolls",
        description: "Sterile cotton rolls for medical use",
        category: "Surgical Cotton",
        default_unit_price_paise: 2500,
    },
    CatalogItem {
        id: "surgical-cotton-balls",
        name: "Surgical Cotton Balls",
        description: "Sterile cotton balls for wound care",
        category: "Surgical Cotton",
        default_unit_price_paise: 1500,
    },
    CatalogItem {
        id: "surgical-cotton-pads",
        name: "Surgical Cotton Pads",
        description: "Sterile cotton pads for medical procedures",
        category: "Surgical Cotton",
        default_unit_price_paise: 2000,
    },
    CatalogItem {
        id: "surgical-cotton-gauze",
        name: "Surgical Cotton Gauze",
        description: "Sterile cotton gauze for dressing",
        category: "Surgical Cotton",
        default_unit_price_paise: 3000,
    },
    CatalogItem {
        id: "surgical-cotton-swabs",
        name: "Surgical Cotton Swabs",
        description: "Sterile cotton swabs for medical use",
        category: "Surgical Cotton",
        default_unit_price_paise: 1200,
    },
    // Medical supplies
    CatalogItem {
        id: "medical-gloves",
        name: "Medical Gloves",
        description: "Disposable medical examination gloves",
        category: "Medical Supplies",
        default_unit_price_paise: 4500,
    },
    CatalogItem {
        id: "surgical-masks",
        name: "Surgical Masks",
        description: "Disposable surgical face masks",
        category: "Medical Supplies",
        default_unit_price_paise: 3500,
    },
    CatalogItem {
        id: "bandages",
        name: "Medical Bandages",
        description: "Elastic medical bandages",
        category: "Medical Supplies",
        default_unit_price_paise: 4000,
    },
    CatalogItem {
        id: "adhesive-tape",
        name: "Medical Adhesive Tape",
        description: "Hypoallergenic medical tape",
        category: "Medical Supplies",
        default_unit_price_paise: 2800,
    },
    CatalogItem {
        id: "antiseptic-solution",
        name: "Antiseptic Solution",
        description: "Povidone-iodine antiseptic solution",
        category: "Medical Supplies",
        default_unit_price_paise: 6500,
    },
    // Cotton products
    CatalogItem {
        id: "cotton-yarn",
        name: "Cotton Yarn",
        description: "High quality cotton yarn for textile industry",
        category: "Cotton Products",
        default_unit_price_paise: 8500,
    },
    CatalogItem {
        id: "cotton-fabric",
        name: "Cotton Fabric",
        description: "Pure cotton fabric rolls",
        category: "Cotton Products",
        default_unit_price_paise: 12000,
    },
    CatalogItem {
        id: "cotton-thread",
        name: "Cotton Thread",
        description: "Strong cotton thread for sewing",
        category: "Cotton Products",
        default_unit_price_paise: 1800,
    },
    CatalogItem {
        id: "cotton-wadding",
        name: "Cotton Wadding",
        description: "Soft cotton wadding for padding",
        category: "Cotton Products",
        default_unit_price_paise: 5500,
    },
    CatalogItem {
        id: "cotton-lint",
        name: "Cotton Lint",
        description: "Fine cotton lint for medical use",
        category: "Cotton Products",
        default_unit_price_paise: 2200,
    },
    // Industrial cotton
    CatalogItem {
        id: "industrial-cotton",
        name: "Industrial Cotton",
        description: "Heavy duty cotton for industrial applications",
        category: "Industrial Cotton",
        default_unit_price_paise: 7500,
    },
    CatalogItem {
        id: "cotton-filters",
        name: "Cotton Filters",
        description: "Cotton filter pads for filtration systems",
        category: "Industrial Cotton",
        default_unit_price_paise: 9500,
    },
    CatalogItem {
        id: "cotton-insulation",
        name: "Cotton Insulation",
        description: "Cotton insulation material",
        category: "Industrial Cotton",
        default_unit_price_paise: 11000,
    },
    CatalogItem {
        id: "cotton-packing",
        name: "Cotton Packing Material",
        description: "Cotton packing for fragile items",
        category: "Industrial Cotton",
        default_unit_price_paise: 3500,
    },
    CatalogItem {
        id: "cotton-absorbent",
        name: "Cotton Absorbent Pads",
        description: "Highly absorbent cotton pads",
        category: "Industrial Cotton",
        default_unit_price_paise: 4200,
    },
];

/// All items in the given category.
pub fn items_in_category(category: &str) -> impl Iterator<Item = &'static CatalogItem> {
    PREDEFINED_ITEMS
        .iter()
        .filter(move |item| item.category == category)
}

/// Look up an item by its identifier.
pub fn item_by_id(id: &str) -> Option<&'static CatalogItem> {
    PREDEFINED_ITEMS.iter().find(|item| item.id == id)
}

/// Case-insensitive substring search over name, description, and category.
pub fn search(query: &str) -> Vec<&'static CatalogItem> {
    let query = query.to_lowercase();
    PREDEFINED_ITEMS
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lookup_by_id() {
        let item = item_by_id("surgical-cotton-rolls").unwrap();
        assert_eq!(item.name, "Surgical Cotton Rolls");
        assert_eq!(item.default_unit_price(), dec!(25.00));
        assert!(item_by_id("no-such-item").is_none());
    }

    #[test]
    fn every_item_belongs_to_a_known_category() {
        for item in PREDEFINED_ITEMS {
            assert!(
                CATEGORIES.contains(&item.category),
                "unknown category on {}",
                item.id
            );
        }
    }

    #[test]
    fn category_listing() {
        let surgical: Vec<_> = items_in_category("Surgical Cotton").collect();
        assert_eq!(surgical.len(), 5);
        assert!(items_in_category("Stationery").next().is_none());
    }

    #[test]
    fn search_is_case_insensitive() {
        let hits = search("GAUZE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "surgical-cotton-gauze");

        // Matches category text too.
        assert_eq!(search("industrial").len(), 5);
        assert!(search("granite").is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for item in PREDEFINED_ITEMS {
            assert!(seen.insert(item.id), "duplicate id {}", item.id);
        }
    }
}
