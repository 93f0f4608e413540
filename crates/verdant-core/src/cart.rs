//! # Cart Module
//!
//! The shopping cart aggregate and its state transitions.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Frontend Action          Command                Cart Transition        │
//! │  ───────────────          ───────                ───────────────        │
//! │                                                                         │
//! │  Tap "+" on menu ────────► add_to_cart() ──────► add_item(entry)       │
//! │                                                                         │
//! │  Tap "+/−" in cart ──────► update_cart_item() ─► update_quantity(id,q) │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_from_cart() ─► remove_item(id)       │
//! │                                                                         │
//! │  Tap "Clear Cart" ───────► clear_cart() ───────► clear()               │
//! │                                                                         │
//! │  NOTE: every transition is TOTAL. Absent ids are no-ops, quantities    │
//! │        ≤ 0 degrade to removal. Nothing here can fail.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants (hold after every operation, not just eventually)
//! 1. `items` contains at most one line per catalog id
//! 2. Every line's quantity is ≥ 1
//! 3. The stored total exactly equals Σ unit_price × quantity; it is
//!    recomputed inside every mutation, so it can never drift
//!
//! Fields are private on purpose: readers go through [`Cart::items`] and
//! [`Cart::total`], and every mutation goes through the four named
//! operations. There is no other way to touch the state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::catalog::MenuItem;
use crate::money::Money;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One distinct product currently in the cart.
///
/// ## Price Freezing
/// `unit_price`, `name`, and `image` are captured from the catalog entry
/// at add time and never updated afterwards - first-add price wins, even
/// if a later add passes a record with a different price.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Catalog id (unique within the cart).
    pub id: String,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// Display token at time of adding (frozen).
    pub image: String,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    fn from_entry(entry: &MenuItem) -> Self {
        CartLineItem {
            id: entry.id.clone(),
            name: entry.name.clone(),
            unit_price: entry.price,
            quantity: 1,
            image: entry.image.clone(),
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart aggregate.
///
/// Created empty at session start; mutated only through the four
/// operations below; lives for the process lifetime (no persistence).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Ordered lines, unique by id. Insertion order defines display order.
    items: Vec<CartLineItem>,

    /// Derived total, recomputed on every mutation.
    total: Money,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Adds a catalog entry to the cart. Always succeeds.
    ///
    /// ## Behavior
    /// - Entry already in cart: its quantity increases by 1. The frozen
    ///   `unit_price`/`name`/`image` stay as they were on first add.
    /// - Entry not in cart: appended as a new line with quantity 1.
    pub fn add_item(&mut self, entry: &MenuItem) {
        if let Some(line) = self.items.iter_mut().find(|l| l.id == entry.id) {
            line.quantity += 1;
        } else {
            self.items.push(CartLineItem::from_entry(entry));
        }
        self.recompute_total();
    }

    /// Removes the line with the given id. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|l| l.id != id);
        self.recompute_total();
    }

    /// Sets a line's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - No line with `id`: no-op.
    /// - `quantity > 0`: absolute set (not a delta).
    /// - `quantity ≤ 0`: the line is removed entirely.
    ///
    /// The cart screen implements "−" by passing `current - 1`, so
    /// decrementing from 1 removes the line. That is deliberate: it is the
    /// cart's only removal gesture besides explicit delete, and there is
    /// no clamp-at-1 variant.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
        self.recompute_total();
    }

    /// Unconditionally resets the cart to empty. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::zero();
        self.created_at = Utc::now();
    }

    /// The derived total: Σ unit_price × quantity.
    ///
    /// This is the single source of truth. Callers must never sum
    /// `items()` themselves - that is how totals drift.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Read access to the lines, in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines (for the tab-bar badge).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = self
            .items
            .iter()
            .map(CartLineItem::line_total)
            .fold(Money::zero(), |acc, t| acc + t);
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, cents: i64, image: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "Mains".to_string(),
            price: Money::from_cents(cents),
            description: String::new(),
            image: image.to_string(),
        }
    }

    fn salad() -> MenuItem {
        entry("1", "Caesar Salad", 1099, "🥗")
    }

    fn bread() -> MenuItem {
        entry("2", "Garlic Bread", 699, "🍞")
    }

    /// Checks the three invariants on a cart state.
    fn assert_invariants(cart: &Cart) {
        // Uniqueness by id
        for (i, a) in cart.items().iter().enumerate() {
            for b in &cart.items()[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate line for id {}", a.id);
            }
        }
        // Positivity
        for line in cart.items() {
            assert!(line.quantity >= 1, "line {} has quantity {}", line.id, line.quantity);
        }
        // Total consistency
        let expected = cart
            .items()
            .iter()
            .map(CartLineItem::line_total)
            .fold(Money::zero(), |acc, t| acc + t);
        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn test_new_cart_is_empty_with_zero_total() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_accumulates_same_id() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.add_item(&salad());

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(2198));
        assert_invariants(&cart);
    }

    #[test]
    fn test_first_add_price_wins() {
        let mut cart = Cart::new();
        cart.add_item(&salad());

        // Same id, different price/name - frozen fields must not change
        let repriced = entry("1", "Caesar Salad (new)", 1299, "🥗");
        cart.add_item(&repriced);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].unit_price, Money::from_cents(1099));
        assert_eq!(cart.items()[0].name, "Caesar Salad");
        assert_eq!(cart.total(), Money::from_cents(2198));
        assert_invariants(&cart);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = Cart::new();
        cart.add_item(&bread());
        cart.add_item(&salad());
        cart.add_item(&bread());

        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_absolute_set() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.update_quantity("1", 3);

        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total(), Money::from_cents(3297));
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        // "−" on a quantity-1 line passes 0: the line must vanish
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.update_quantity("1", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.update_quantity("1", -5);

        assert!(cart.is_empty());
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.update_quantity("nonexistent", 7);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), Money::from_cents(1099));
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.remove_item("nonexistent");

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(1099));
        assert_invariants(&cart);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.add_item(&bread());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_invariants(&cart);
    }

    #[test]
    fn test_scenario_two_items_then_update() {
        // empty → add salad → add bread → set salad qty to 3
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.add_item(&bread());
        cart.update_quantity("1", 3);

        let lines: Vec<(&str, i64)> = cart
            .items()
            .iter()
            .map(|l| (l.id.as_str(), l.quantity))
            .collect();
        assert_eq!(lines, vec![("1", 3), ("2", 1)]);
        // 3 × 10.99 + 6.99 = 39.96
        assert_eq!(cart.total(), Money::from_cents(3996));
        assert_invariants(&cart);
    }

    #[test]
    fn test_scenario_then_remove_second() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.add_item(&bread());
        cart.update_quantity("1", 3);
        cart.remove_item("2");

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].id, "1");
        assert_eq!(cart.items()[0].quantity, 3);
        // 3 × 10.99 = 32.97
        assert_eq!(cart.total(), Money::from_cents(3297));
        assert_invariants(&cart);
    }

    #[test]
    fn test_invariants_over_mixed_sequence() {
        let mut cart = Cart::new();
        let items = [salad(), bread(), entry("3", "Filet Mignon", 2999, "🥩")];

        cart.add_item(&items[0]);
        assert_invariants(&cart);
        cart.add_item(&items[1]);
        assert_invariants(&cart);
        cart.add_item(&items[0]);
        assert_invariants(&cart);
        cart.update_quantity("2", 4);
        assert_invariants(&cart);
        cart.add_item(&items[2]);
        assert_invariants(&cart);
        cart.remove_item("1");
        assert_invariants(&cart);
        cart.update_quantity("3", 0);
        assert_invariants(&cart);
        cart.update_quantity("2", 1);
        assert_invariants(&cart);
        cart.clear();
        assert_invariants(&cart);
    }

    #[test]
    fn test_total_quantity_badge() {
        let mut cart = Cart::new();
        cart.add_item(&salad());
        cart.add_item(&salad());
        cart.add_item(&bread());

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
    }
}
