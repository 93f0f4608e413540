//! # State Module
//!
//! Manages application state for the Tauri shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can exercise individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(catalog_state);                                     │   │
//! │  │  app.manage(cart_state);                                        │   │
//! │  │  app.manage(session_state);                                     │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬──────┴────────┬─────────────────┐               │
//! │      ▼               ▼               ▼                 ▼               │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐  ┌──────────────┐       │
//! │  │ Catalog  │  │ CartState│  │ SessionState │  │ ConfigState  │       │
//! │  │ State    │  │          │  │              │  │              │       │
//! │  │ (parsed  │  │ Arc<Mutex│  │ Arc<Mutex<   │  │ store name,  │       │
//! │  │  menu,   │  │  <Cart>> │  │  Option<     │  │ currency     │       │
//! │  │  frozen) │  │          │  │  Account>>>  │  │              │       │
//! │  └──────────┘  └──────────┘  └──────────────┘  └──────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: read-only after startup parse, no lock needed         │
//! │  • CartState: protected by Arc<Mutex<T>> for exclusive access          │
//! │  • SessionState: protected by Arc<Mutex<T>>                            │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod session;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use session::{Account, Preferences, Profile, SessionState};
