//! # Verdant Mobile Library
//!
//! Core library for the Verdant storefront application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! verdant_mobile_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Parsed menu catalog (read-only)
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── session.rs  ◄─── Account session + profile
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Catalog browsing commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── auth.rs     ◄─── Login/registration commands
//! │   ├── profile.rs  ◄─── Profile/preferences commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{CartState, CatalogState, ConfigState, SessionState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Parse the Menu Catalog ───────────────────────────────────────────► │
/// │     • Raw feed records (string prices) → typed MenuItems               │
/// │     • Malformed records abort startup: a half-priced menu is worse     │
/// │       than a visible failure                                            │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: frozen, read-only                                   │
/// │     • CartState: empty cart with Mutex for serialized updates           │
/// │     • SessionState: signed out                                          │
/// │     • ConfigState: defaults + VERDANT_* env overrides                   │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Verdant Storefront Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            // Parse the catalog once; string prices never cross this line
            let catalog_state = CatalogState::new()?;
            info!(items = catalog_state.items().len(), "Menu catalog loaded");

            let cart_state = CartState::new();
            let session_state = SessionState::new();
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(catalog_state);
            app.manage(cart_state);
            app.manage(session_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Menu commands
            commands::menu::get_menu,
            commands::menu::get_menu_item,
            commands::menu::get_categories,
            commands::menu::get_popular_items,
            // Cart commands
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::update_cart_item,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            // Auth commands
            commands::auth::login,
            commands::auth::register,
            commands::auth::logout,
            // Profile commands
            commands::profile::get_profile,
            commands::profile::update_profile,
            commands::profile::update_preferences,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=verdant=trace` - Show trace for verdant crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,verdant=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
