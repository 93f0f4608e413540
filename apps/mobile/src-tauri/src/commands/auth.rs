//! # Auth Commands
//!
//! Login, registration, and logout.
//!
//! ## No Real Credentials
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The auth flow validates input SHAPE only:                              │
//! │                                                                         │
//! │  login(email, password)                                                 │
//! │    ├── email looks like an address?    ── no ──► VALIDATION_ERROR       │
//! │    ├── password long enough?           ── no ──► VALIDATION_ERROR       │
//! │    └── yes ──► mint user id, establish in-memory session               │
//! │                                                                         │
//! │  There is no credential store, no hashing, no token. A production      │
//! │  backend would slot in behind these commands without changing their    │
//! │  signatures.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{Account, SessionState};
use verdant_core::validation::{
    validate_display_name, validate_email, validate_password, validate_password_confirmation,
};

/// What the frontend learns about a freshly established session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl From<&Account> for SessionDto {
    fn from(account: &Account) -> Self {
        SessionDto {
            user_id: account.user_id.clone(),
            name: account.profile.name.clone(),
            email: account.profile.email.clone(),
        }
    }
}

/// Display name guess for login, where only an email is known.
/// "john.doe@example.com" → "john.doe"
fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Signs in with an email and password.
///
/// Shape validation only; any well-formed pair is accepted.
#[tauri::command]
pub fn login(
    session: State<'_, SessionState>,
    email: String,
    password: String,
) -> Result<SessionDto, ApiError> {
    debug!(email = %email, "login command");

    validate_email(&email)?;
    validate_password(&password)?;

    let account = Account::new(
        Uuid::new_v4().to_string(),
        name_from_email(&email),
        email.trim().to_string(),
    );
    let dto = SessionDto::from(&account);
    session.sign_in(account);

    info!(user_id = %dto.user_id, "session established");
    Ok(dto)
}

/// Registers a new account and signs it in.
///
/// ## Arguments
/// * `name` - Display name
/// * `email` - Email address (shape-checked)
/// * `password` / `confirm_password` - Must match and be ≥ 8 characters
#[tauri::command]
pub fn register(
    session: State<'_, SessionState>,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<SessionDto, ApiError> {
    debug!(email = %email, "register command");

    validate_display_name(&name)?;
    validate_email(&email)?;
    validate_password(&password)?;
    validate_password_confirmation(&password, &confirm_password)?;

    let account = Account::new(
        Uuid::new_v4().to_string(),
        name.trim().to_string(),
        email.trim().to_string(),
    );
    let dto = SessionDto::from(&account);
    session.sign_in(account);

    info!(user_id = %dto.user_id, "account registered");
    Ok(dto)
}

/// Ends the current session. Safe to call when already signed out.
#[tauri::command]
pub fn logout(session: State<'_, SessionState>) {
    debug!("logout command");
    session.sign_out();
}
