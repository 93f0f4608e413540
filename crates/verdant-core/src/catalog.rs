//! # Catalog Module
//!
//! The read-only menu catalog: the source of purchasable product records.
//!
//! ## Two Shapes, One Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Data Flow                                  │
//! │                                                                         │
//! │  RawMenuRecord                       MenuItem                           │
//! │  ─────────────                       ────────                           │
//! │  price: "10.99" (string)   ──────►   price: Money (1099 cents)          │
//! │                 MenuItem::try_from                                      │
//! │                 (parse ONCE, reject malformed)                          │
//! │                                                                         │
//! │  The upstream feed ships prices as display strings. They cross into    │
//! │  typed land exactly once, at startup. The cart only ever sees Money.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The built-in fixture mirrors what a menu API would return; swapping it
//! for a real feed later only replaces [`menu_fixture`], not the boundary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_id, validate_item_name};

// =============================================================================
// Raw Records (upstream shape)
// =============================================================================

/// A menu record exactly as the upstream catalog feed ships it.
///
/// The price is a decimal display string ("10.99") here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

// =============================================================================
// Typed Catalog Entries
// =============================================================================

/// A purchasable menu item, fully validated and typed.
///
/// `price` is the source of truth the cart freezes at add time; the cart
/// never re-fetches it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable catalog identifier, unique across the menu.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category label ("Appetizers", "Mains", ...).
    pub category: String,

    /// Unit price, parsed once from the raw record.
    pub price: Money,

    /// Short description shown on menu cards.
    pub description: String,

    /// Opaque display token (emoji placeholder until real assets land).
    pub image: String,
}

impl TryFrom<RawMenuRecord> for MenuItem {
    type Error = ValidationError;

    /// Validates and types a raw feed record.
    ///
    /// This is the catalog boundary: malformed monetary strings and missing
    /// fields are rejected here, before anything can reach the cart.
    fn try_from(raw: RawMenuRecord) -> Result<Self, Self::Error> {
        validate_item_id(&raw.id)?;
        validate_item_name(&raw.name)?;
        let price = Money::parse(&raw.price)?;

        Ok(MenuItem {
            id: raw.id,
            name: raw.name,
            category: raw.category,
            price,
            description: raw.description,
            image: raw.image,
        })
    }
}

/// A browsing category shown on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

// =============================================================================
// Built-in Fixture
// =============================================================================

/// The category filter shown above the menu list. "All" passes everything.
pub const ALL_CATEGORY: &str = "All";

fn record(
    id: &str,
    name: &str,
    category: &str,
    price: &str,
    description: &str,
    image: &str,
) -> RawMenuRecord {
    RawMenuRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

/// The built-in menu, in upstream (raw) shape.
///
/// In production this would come from a menu API; the shape is identical.
pub fn menu_fixture() -> Vec<RawMenuRecord> {
    vec![
        record("1", "Caesar Salad", "Appetizers", "10.99", "Fresh romaine lettuce with our homemade Caesar dressing", "🥗"),
        record("2", "Garlic Bread", "Appetizers", "6.99", "Toasted bread with garlic butter and herbs", "🍞"),
        record("3", "Filet Mignon", "Mains", "29.99", "8oz center-cut filet, cooked to perfection", "🥩"),
        record("4", "Grilled Salmon", "Mains", "24.99", "Atlantic salmon with lemon herb butter", "🐟"),
        record("5", "Mushroom Risotto", "Mains", "18.99", "Creamy arborio rice with wild mushrooms", "🍚"),
        record("6", "Chocolate Lava Cake", "Desserts", "8.99", "Warm chocolate cake with a molten center", "🍰"),
        record("7", "Crème Brûlée", "Desserts", "7.99", "Classic vanilla custard with caramelized sugar", "🍮"),
        record("8", "Red Wine", "Drinks", "12.99", "Glass of house red wine", "🍷"),
        record("9", "Craft Beer", "Drinks", "6.99", "Local IPA", "🍺"),
    ]
}

/// Browsing categories for the home screen.
pub fn categories() -> Vec<Category> {
    let category = |id: &str, name: &str, icon: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    };
    vec![
        category("appetizers", "Appetizers", "🍤"),
        category("mains", "Mains", "🍲"),
        category("desserts", "Desserts", "🍰"),
        category("drinks", "Drinks", "🍹"),
    ]
}

/// Catalog ids featured in the "Popular This Week" rail, in display order.
pub fn popular_ids() -> &'static [&'static str] {
    &["4", "3", "5", "6"]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parses_cleanly() {
        let items: Result<Vec<MenuItem>, _> =
            menu_fixture().into_iter().map(MenuItem::try_from).collect();
        let items = items.expect("built-in menu must be well-formed");

        assert_eq!(items.len(), 9);
        assert_eq!(items[0].name, "Caesar Salad");
        assert_eq!(items[0].price, Money::from_cents(1099));
        assert_eq!(items[8].price, Money::from_cents(699));
    }

    #[test]
    fn test_fixture_ids_unique() {
        let items = menu_fixture();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn test_malformed_price_rejected_at_boundary() {
        let mut raw = menu_fixture().remove(0);
        raw.price = "ten dollars".to_string();
        assert!(MenuItem::try_from(raw).is_err());
    }

    #[test]
    fn test_missing_id_rejected_at_boundary() {
        let mut raw = menu_fixture().remove(0);
        raw.id = "  ".to_string();
        assert!(MenuItem::try_from(raw).is_err());
    }

    #[test]
    fn test_popular_ids_exist_in_menu() {
        let items = menu_fixture();
        for id in popular_ids() {
            assert!(items.iter().any(|i| i.id == *id), "popular id {} missing", id);
        }
    }
}
