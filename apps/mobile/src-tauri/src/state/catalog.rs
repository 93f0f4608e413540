//! # Catalog State
//!
//! The typed, read-only menu catalog.
//!
//! Raw feed records (prices as decimal strings) are validated and parsed
//! ONCE here, at startup. Every command afterwards works with typed
//! [`MenuItem`]s; nothing downstream ever parses a price string again.
//!
//! ## Thread Safety
//! The catalog is immutable after construction, so no lock is needed.

use verdant_core::catalog::{self, Category};
use verdant_core::{MenuItem, RawMenuRecord, ValidationError};

/// Tauri-managed catalog state.
#[derive(Debug)]
pub struct CatalogState {
    items: Vec<MenuItem>,
    categories: Vec<Category>,
}

impl CatalogState {
    /// Builds the catalog from the built-in menu fixture.
    pub fn new() -> Result<Self, ValidationError> {
        Self::from_records(catalog::menu_fixture())
    }

    /// Builds the catalog from raw feed records, rejecting malformed ones.
    ///
    /// A malformed record (bad price string, missing id) fails the whole
    /// load: a partially-priced menu is worse than a startup error.
    pub fn from_records(records: Vec<RawMenuRecord>) -> Result<Self, ValidationError> {
        let items = records
            .into_iter()
            .map(MenuItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CatalogState {
            items,
            categories: catalog::categories(),
        })
    }

    /// All menu items, in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up a single item by its catalog id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Browsing categories for the home screen.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The "Popular This Week" subset, in display order.
    pub fn popular(&self) -> Vec<&MenuItem> {
        catalog::popular_ids()
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::Money;

    #[test]
    fn test_fixture_catalog_loads() {
        let catalog = CatalogState::new().unwrap();
        assert_eq!(catalog.items().len(), 9);
        assert_eq!(catalog.categories().len(), 4);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = CatalogState::new().unwrap();
        let salad = catalog.get("1").unwrap();
        assert_eq!(salad.name, "Caesar Salad");
        assert_eq!(salad.price, Money::from_cents(1099));

        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_popular_resolves_in_order() {
        let catalog = CatalogState::new().unwrap();
        let names: Vec<&str> = catalog.popular().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Grilled Salmon",
                "Filet Mignon",
                "Mushroom Risotto",
                "Chocolate Lava Cake"
            ]
        );
    }

    #[test]
    fn test_malformed_feed_fails_load() {
        let mut records = verdant_core::catalog::menu_fixture();
        records[3].price = "24.999".to_string();
        assert!(CatalogState::from_records(records).is_err());
    }
}
