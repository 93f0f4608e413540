//! # verdant-core: Pure Business Logic for Verdant
//!
//! This crate is the **heart** of the Verdant storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Verdant Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Home ──► Menu ──► Cart ──► Profile                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    get_menu, add_to_cart, update_cart_item, login, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ verdant-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ MenuItem  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │ Category  │  │  parsing  │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Menu catalog types and the built-in menu fixture
//! - [`cart`] - The cart aggregate and its four state transitions
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Boundary validation error types
//! - [`validation`] - Input validation at the command boundary
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Transitions**: The four cart operations are defined for every
//!    input and never fail - absent ids degrade to no-ops, non-positive
//!    quantities degrade to removal. Errors exist only at the input boundary.
//!
//! ## Example Usage
//!
//! ```rust
//! use verdant_core::cart::Cart;
//! use verdant_core::catalog::MenuItem;
//! use verdant_core::money::Money;
//!
//! let salad = MenuItem {
//!     id: "1".into(),
//!     name: "Caesar Salad".into(),
//!     category: "Appetizers".into(),
//!     price: Money::from_cents(1099),
//!     description: "Fresh romaine lettuce".into(),
//!     image: "🥗".into(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&salad);
//! cart.add_item(&salad); // same id: quantity becomes 2
//!
//! assert_eq!(cart.total(), Money::from_cents(2198));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use verdant_core::Money` instead of
// `use verdant_core::money::Money`

pub use cart::{Cart, CartLineItem};
pub use catalog::{Category, MenuItem, RawMenuRecord};
pub use error::ValidationError;
pub use money::Money;
