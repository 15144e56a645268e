//! Selectors - the read path into the store used by commands and views

use chrono::{DateTime, Utc};

use crate::app::AppState;
use crate::entities::{LoginSchema, Profile, User, ValidateProfileError};
use crate::theme::Theme;

pub fn get_profile_form(state: &AppState) -> Option<&Profile> {
    state.profile.form.as_ref()
}

pub fn get_profile_data(state: &AppState) -> Option<&Profile> {
    state.profile.data.as_ref()
}

pub fn get_profile_is_loading(state: &AppState) -> bool {
    state.profile.is_loading
}

pub fn get_profile_error(state: &AppState) -> Option<&str> {
    state.profile.error.as_deref()
}

pub fn get_profile_readonly(state: &AppState) -> bool {
    state.profile.readonly
}

pub fn get_profile_last_saved_at(state: &AppState) -> Option<DateTime<Utc>> {
    state.profile.last_saved_at
}

pub fn get_profile_validate_errors(state: &AppState) -> &[ValidateProfileError] {
    &state.profile.validate_errors
}

pub fn get_user_auth_data(state: &AppState) -> Option<&User> {
    state.user.auth_data.as_ref()
}

/// Token sent with authenticated requests. A user without one sends none.
pub fn get_auth_token(state: &AppState) -> Option<String> {
    get_user_auth_data(state).and_then(|user| user.token.clone())
}

pub fn get_login_state(state: &AppState) -> &LoginSchema {
    &state.login
}

pub fn get_theme(state: &AppState) -> Theme {
    state.theme.theme()
}
