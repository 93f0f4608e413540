//! # Cart State
//!
//! Owns the session cart and serializes access to it.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! Each user tap dispatches one command, the command acquires the lock,
//! runs one total transition to completion, and releases the lock. No
//! transition suspends or triggers another transition, so the four cart
//! operations are effectively serialized exactly as a UI event loop
//! would serialize them.
//!
//! ## Ownership
//! `CartState` is the cart's only owner. Readers get a snapshot via
//! [`CartState::with_cart`]; writers go through [`CartState::with_cart_mut`],
//! which is the only path to the core's mutating operations.

use std::sync::{Arc, Mutex};

use verdant_core::Cart;

/// Tauri-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&entry));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{MenuItem, Money};

    fn entry(id: &str, cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: "Mains".to_string(),
            price: Money::from_cents(cents),
            description: String::new(),
            image: "🍲".to_string(),
        }
    }

    #[test]
    fn test_mutations_visible_through_reads() {
        let state = CartState::new();
        let item = entry("1", 999);

        state.with_cart_mut(|c| c.add_item(&item));
        state.with_cart_mut(|c| c.add_item(&item));

        let (count, total) = state.with_cart(|c| (c.item_count(), c.total()));
        assert_eq!(count, 1);
        assert_eq!(total, Money::from_cents(1998));
    }

    #[test]
    fn test_clear_through_state_wrapper() {
        let state = CartState::new();
        state.with_cart_mut(|c| c.add_item(&entry("1", 999)));
        state.with_cart_mut(|c| c.clear());

        assert!(state.with_cart(|c| c.is_empty()));
    }
}
