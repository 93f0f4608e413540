//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │  (frontend-only        │
//! │  │  Cart    │     │          │     │  button  │   placeholder; no      │
//! │  └──────────┘     └──────────┘     └──────────┘   backend command)     │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────► (back to empty)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The only fallible path here is resolving an item id against the
//! catalog. The cart transitions themselves are total: once the entry is
//! resolved, the mutation cannot fail.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};
use verdant_core::{Cart, CartLineItem};

/// Totals summary computed by the cart, never by the frontend.
///
/// The frontend must display `total_cents` as-is; summing the lines
/// client-side is exactly the divergence this type exists to prevent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │  Cart Screen                                                    │
/// │  ┌───────────────────────────────────────────────────────────┐  │
/// │  │  Your Cart                                                │  │
/// │  │  🥗 Caesar Salad      $10.99        [−] 3 [+]            │  │
/// │  │  🍞 Garlic Bread      $6.99         [−] 1 [+]            │  │
/// │  │  ─────────────────────────────────────────────           │  │
/// │  │  Total                              $39.96               │  │
/// │  └───────────────────────────────────────────────────────────┘  │
/// │                                                                 │
/// │  invoke('get_cart') → { items: [...], totals: {...} }           │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a menu item to the cart.
///
/// ## Behavior
/// - Item already in cart: quantity increases by 1
/// - Item not in cart: appended as a new line with quantity 1
/// - Price is "frozen" at time of adding (won't change if the catalog
///   record changes later)
///
/// ## Arguments
/// * `item_id` - Catalog id of the item to add
///
/// ## Returns
/// Updated cart, or NOT_FOUND if the id isn't on the menu.
#[tauri::command]
pub fn add_to_cart(
    catalog: State<'_, CatalogState>,
    cart: State<'_, CartState>,
    item_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let entry = catalog
        .get(&item_id)
        .ok_or_else(|| ApiError::not_found("Menu item", &item_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(entry);
        CartResponse::from(&*c)
    }))
}

/// Sets the quantity of a cart line to an absolute value.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line (the "−" button on a quantity-1 line
///   sends 0, which is the implicit removal gesture)
/// - Unknown id: no-op, current cart returned unchanged
///
/// ## Arguments
/// * `item_id` - Catalog id of the line to update
/// * `quantity` - New absolute quantity (may be ≤ 0)
#[tauri::command]
pub fn update_cart_item(
    cart: State<'_, CartState>,
    item_id: String,
    quantity: i64,
) -> CartResponse {
    debug!(item_id = %item_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(&item_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart. Unknown ids are a no-op.
///
/// ## Arguments
/// * `item_id` - Catalog id of the line to remove
#[tauri::command]
pub fn remove_from_cart(cart: State<'_, CartState>, item_id: String) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(&item_id);
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User taps "Clear Cart" on the cart screen
#[tauri::command]
pub fn clear_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_mirror_cart() {
        let catalog = CatalogState::new().unwrap();
        let mut cart = Cart::new();
        cart.add_item(catalog.get("1").unwrap());
        cart.add_item(catalog.get("2").unwrap());
        cart.update_quantity("1", 3);

        let response = CartResponse::from(&cart);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.totals.item_count, 2);
        assert_eq!(response.totals.total_quantity, 4);
        assert_eq!(response.totals.total_cents, 3996);
    }
}
