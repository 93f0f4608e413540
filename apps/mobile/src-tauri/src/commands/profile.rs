//! # Profile Commands
//!
//! Reading and editing the signed-in user's profile and preferences.
//!
//! Plain field mutation with no derived state: the only rules are shape
//! validation on the editable fields and that a session must exist.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Preferences, Profile, SessionState};
use verdant_core::validation::{validate_display_name, validate_email};

/// Profile screen payload: personal fields plus preference toggles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: Profile,
    pub preferences: Preferences,
}

/// Full-replace profile update, as submitted by the profile form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

fn require_session<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::unauthorized("No active session"))
}

/// Gets the signed-in user's profile and preferences.
#[tauri::command]
pub fn get_profile(session: State<'_, SessionState>) -> Result<ProfileResponse, ApiError> {
    debug!("get_profile command");

    require_session(session.with_account(|account| {
        account.map(|a| ProfileResponse {
            profile: a.profile.clone(),
            preferences: a.preferences,
        })
    }))
}

/// Replaces the profile fields after validating them.
///
/// ## Returns
/// The updated profile, or UNAUTHORIZED when signed out.
#[tauri::command]
pub fn update_profile(
    session: State<'_, SessionState>,
    update: ProfileUpdate,
) -> Result<ProfileResponse, ApiError> {
    debug!(email = %update.email, "update_profile command");

    validate_display_name(&update.name)?;
    validate_email(&update.email)?;

    require_session(session.with_account_mut(|a| {
        a.profile = Profile {
            name: update.name.trim().to_string(),
            email: update.email.trim().to_string(),
            phone: update.phone.trim().to_string(),
            address: update.address.trim().to_string(),
        };
        ProfileResponse {
            profile: a.profile.clone(),
            preferences: a.preferences,
        }
    }))
}

/// Replaces the preference toggles.
#[tauri::command]
pub fn update_preferences(
    session: State<'_, SessionState>,
    preferences: Preferences,
) -> Result<ProfileResponse, ApiError> {
    debug!(?preferences, "update_preferences command");

    require_session(session.with_account_mut(|a| {
        a.preferences = preferences;
        ProfileResponse {
            profile: a.profile.clone(),
            preferences: a.preferences,
        }
    }))
}
