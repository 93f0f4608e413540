//! # Session State
//!
//! The in-memory account session: who is signed in, their profile fields,
//! and their app preferences.
//!
//! There is deliberately no credential store and no persistence - the
//! auth flow validates input shape only and everything lives for the
//! process lifetime. Restarting the app signs the user out.
//!
//! ## Thread Safety
//! `Arc<Mutex<Option<Account>>>`: `None` means signed out. Commands
//! acquire the lock for the duration of one read or one field update.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editable profile fields, as shown on the profile screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// App preference toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications: bool,
    pub email_updates: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    /// Defaults match the profile screen's initial toggles.
    fn default() -> Self {
        Preferences {
            notifications: true,
            email_updates: false,
            dark_mode: false,
        }
    }
}

/// A signed-in account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque user id, minted at login/registration.
    pub user_id: String,

    pub profile: Profile,

    pub preferences: Preferences,

    /// When this session was established.
    pub signed_in_at: DateTime<Utc>,
}

impl Account {
    /// Creates a fresh account for a new session.
    pub fn new(user_id: String, name: String, email: String) -> Self {
        Account {
            user_id,
            profile: Profile {
                name,
                email,
                phone: String::new(),
                address: String::new(),
            },
            preferences: Preferences::default(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Tauri-managed session state. `None` = signed out.
#[derive(Debug)]
pub struct SessionState {
    account: Arc<Mutex<Option<Account>>>,
}

impl SessionState {
    /// Creates a signed-out session state.
    pub fn new() -> Self {
        SessionState {
            account: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the current session (used by login/register).
    pub fn sign_in(&self, account: Account) {
        let mut guard = self.account.lock().expect("Session mutex poisoned");
        *guard = Some(account);
    }

    /// Ends the current session. Signing out twice is fine.
    pub fn sign_out(&self) {
        let mut guard = self.account.lock().expect("Session mutex poisoned");
        *guard = None;
    }

    /// Executes a function with read access to the current account.
    pub fn with_account<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Option<&Account>) -> R,
    {
        let guard = self.account.lock().expect("Session mutex poisoned");
        f(guard.as_ref())
    }

    /// Executes a function with write access to the current account.
    ///
    /// Returns `None` when signed out (the closure is not run).
    pub fn with_account_mut<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Account) -> R,
    {
        let mut guard = self.account.lock().expect("Session mutex poisoned");
        guard.as_mut().map(f)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            "user-1".to_string(),
            "John Doe".to_string(),
            "john.doe@example.com".to_string(),
        )
    }

    #[test]
    fn test_starts_signed_out() {
        let state = SessionState::new();
        assert!(state.with_account(|a| a.is_none()));
    }

    #[test]
    fn test_sign_in_and_out() {
        let state = SessionState::new();
        state.sign_in(account());
        assert!(state.with_account(|a| a.is_some()));

        state.sign_out();
        assert!(state.with_account(|a| a.is_none()));
        state.sign_out(); // idempotent
        assert!(state.with_account(|a| a.is_none()));
    }

    #[test]
    fn test_profile_update_requires_session() {
        let state = SessionState::new();
        assert!(state
            .with_account_mut(|a| a.profile.phone = "555".to_string())
            .is_none());

        state.sign_in(account());
        state.with_account_mut(|a| a.profile.phone = "(123) 456-7890".to_string());
        let phone = state.with_account(|a| a.unwrap().profile.phone.clone());
        assert_eq!(phone, "(123) 456-7890");
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.notifications);
        assert!(!prefs.email_updates);
        assert!(!prefs.dark_mode);
    }
}
