//! # Tauri Commands Module
//!
//! All commands exposed to the WebView frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Catalog browsing (list, filter, search, popular)
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── auth.rs     ◄─── Login/registration/logout
//! ├── profile.rs  ◄─── Profile fields and preferences
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const cart = await invoke('add_to_cart', { itemId: '1' });             │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn add_to_cart(                                                        │
//! │      catalog: State<'_, CatalogState>, ◄── Injected by Tauri            │
//! │      cart: State<'_, CartState>,       ◄── Injected by Tauri            │
//! │      item_id: String,                  ◄── From invoke params           │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { items: [...], totals: {...} }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn get_menu(catalog: State<'_, CatalogState>, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: State<'_, CartState>)
//!
//! // Needs both
//! fn add_to_cart(catalog: State<'_, CatalogState>, cart: State<'_, CartState>, ...)
//! ```

pub mod auth;
pub mod cart;
pub mod config;
pub mod menu;
pub mod profile;
