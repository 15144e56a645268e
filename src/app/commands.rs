//! Command handlers - business logic for processing UI events

use crate::api::LoginRequest;
use crate::app::selectors::{
    get_auth_token, get_login_state, get_profile_form, get_profile_is_loading, get_profile_readonly,
    get_user_auth_data,
};
use crate::app::AppState;
use crate::entities::{Country, Currency, ProfileField, ProfileSchema};
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::router::{normalize_path, AppRoute};

impl AppState {
    // ========================
    // Navigation
    // ========================

    /// Open the n-th sidebar entry
    pub fn navigate_index(&mut self, index: usize) -> Option<NetworkCommand> {
        let target = self.router.sidebar_items().get(index).copied()?;
        self.navigate(target.path)
    }

    /// Resolve `path` against the visible routes and mount the result
    pub fn navigate(&mut self, path: &str) -> Option<NetworkCommand> {
        let path = normalize_path(path);
        let route = self.router.resolve(&path);

        self.stop_editing();
        self.route = route;
        self.path = path;
        self.navigation_seq += 1;
        tracing::info!(path = %self.path, route = ?route, "Navigated");

        self.on_route_mounted()
    }

    /// Mount the current route again
    pub fn reload(&mut self) -> Option<NetworkCommand> {
        self.navigation_seq += 1;
        tracing::info!(path = %self.path, "Reloading page");
        self.on_route_mounted()
    }

    fn on_route_mounted(&mut self) -> Option<NetworkCommand> {
        match self.route {
            AppRoute::Profile => self.fetch_profile(),
            _ => None,
        }
    }

    pub fn open_path_input(&mut self) {
        self.path_input = self.path.clone();
        self.show_path_input = true;
    }

    pub fn path_char(&mut self, c: char) {
        self.path_input.push(c);
    }

    pub fn path_backspace(&mut self) {
        self.path_input.pop();
    }

    pub fn submit_path(&mut self) -> Option<NetworkCommand> {
        let path = std::mem::take(&mut self.path_input);
        self.show_path_input = false;
        self.navigate(&path)
    }

    pub fn cancel_path_input(&mut self) {
        self.path_input.clear();
        self.show_path_input = false;
    }

    // ========================
    // Shell
    // ========================

    pub fn toggle_theme(&mut self) {
        match self.theme.toggle(&mut self.storage) {
            Ok(theme) => tracing::info!(theme = theme.as_str(), "Theme switched"),
            Err(e) => {
                tracing::warn!(error = %e, "Could not persist theme");
                self.status = Some(format!("Theme not saved: {}", e));
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Login
    // ========================

    pub fn open_login(&mut self) {
        if get_user_auth_data(self).is_none() {
            self.show_login = true;
        }
    }

    pub fn close_login(&mut self) {
        self.show_login = false;
        self.login.reset();
        self.pending_login = None;
    }

    pub fn login_char(&mut self, c: char) {
        if !get_login_state(self).is_loading {
            self.login.current_input_mut().push(c);
        }
    }

    pub fn login_backspace(&mut self) {
        if !get_login_state(self).is_loading {
            self.login.current_input_mut().pop();
        }
    }

    pub fn login_next_field(&mut self) {
        self.login.field = self.login.field.next();
    }

    pub fn submit_login(&mut self) -> Option<NetworkCommand> {
        let login = get_login_state(self);
        if login.is_loading {
            return None;
        }
        let credentials = LoginRequest {
            username: login.username.trim().to_string(),
            password: login.password.clone(),
        };
        if credentials.username.is_empty() {
            self.login.error = Some(String::from("Enter a username"));
            return None;
        }

        self.login.is_loading = true;
        self.login.error = None;
        let id = self.next_id();
        self.pending_login = Some(id);

        Some(NetworkCommand::Login { id, credentials })
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.user.logout(&mut self.storage) {
            tracing::warn!(error = %e, "Could not clear stored user");
        }
        self.router.set_auth(false);
        self.profile = ProfileSchema::default();
        self.pending_fetch = None;
        self.pending_update = None;
        self.status = Some(String::from("Signed out"));
        tracing::info!("User signed out");

        if !self.router.is_visible(self.route) {
            // Public routes never issue requests on mount
            let _ = self.navigate("/");
        }
    }

    // ========================
    // Profile
    // ========================

    pub fn fetch_profile(&mut self) -> Option<NetworkCommand> {
        if get_profile_is_loading(self) || !get_profile_readonly(self) {
            return None;
        }
        get_user_auth_data(self)?;

        self.profile.fetch_pending();
        let id = self.next_id();
        self.pending_fetch = Some(id);

        Some(NetworkCommand::FetchProfile {
            id,
            token: get_auth_token(self),
        })
    }

    pub fn edit_profile(&mut self) {
        if get_profile_is_loading(self) {
            return;
        }
        self.profile.set_readonly(false);
        self.active_field = ProfileField::default();
    }

    pub fn cancel_edit(&mut self) {
        self.stop_editing();
        self.profile.cancel_edit();
    }

    /// Dispatch the save workflow for the current draft
    pub fn save_profile(&mut self) -> Option<NetworkCommand> {
        if get_profile_is_loading(self) || get_profile_readonly(self) {
            return None;
        }
        self.stop_editing();

        let form = get_profile_form(self).cloned();
        self.profile.update_pending();
        let id = self.next_id();
        self.pending_update = Some(id);
        tracing::info!(id, "Saving profile");

        Some(NetworkCommand::UpdateProfile {
            id,
            token: get_auth_token(self),
            form,
        })
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn select_next(&mut self) {
        self.cycle_select(true);
    }

    pub fn select_prev(&mut self) {
        self.cycle_select(false);
    }

    fn cycle_select(&mut self, forward: bool) {
        if get_profile_readonly(self) || get_profile_is_loading(self) {
            return;
        }
        match self.active_field {
            ProfileField::Currency => self.profile.update_profile(|p| {
                p.currency = Some(match (p.currency, forward) {
                    (Some(c), true) => c.next(),
                    (Some(c), false) => c.prev(),
                    (None, true) => Currency::ALL[0],
                    (None, false) => Currency::ALL[Currency::ALL.len() - 1],
                });
            }),
            ProfileField::Country => self.profile.update_profile(|p| {
                p.country = Some(match (p.country, forward) {
                    (Some(c), true) => c.next(),
                    (Some(c), false) => c.prev(),
                    (None, true) => Country::ALL[0],
                    (None, false) => Country::ALL[Country::ALL.len() - 1],
                });
            }),
            _ => {}
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if get_profile_readonly(self) || get_profile_is_loading(self) || self.active_field.is_select() {
            return;
        }
        self.edit_buffer = get_profile_form(self)
            .map(|p| p.field_text(self.active_field))
            .unwrap_or_default();
        self.cursor_position = self.edit_buffer.len();
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.edit_buffer.clear();
        self.cursor_position = 0;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.edit_buffer[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.edit_buffer.len() {
            self.cursor_position = self.edit_buffer[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.edit_buffer.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        if self.cursor_position <= self.edit_buffer.len() {
            self.edit_buffer.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
            self.commit_edit_buffer();
        }
    }

    pub fn delete_char(&mut self) {
        if self.input_mode != InputMode::Editing || self.cursor_position == 0 {
            return;
        }
        let prev_pos = self.edit_buffer[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.edit_buffer.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.commit_edit_buffer();
    }

    /// Write the edit buffer into the draft
    fn commit_edit_buffer(&mut self) {
        let field = self.active_field;
        let value = self.edit_buffer.clone();
        self.profile.update_profile(|p| p.set_field_text(field, value));
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network result. Responses for anything but the latest request
    /// of their kind are dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::LoginResult { id, result } => {
                if self.pending_login != Some(id) {
                    tracing::debug!(id, "Dropping stale login response");
                    return None;
                }
                self.pending_login = None;
                match result {
                    Ok(user) => {
                        let username = user.username.clone();
                        if let Err(e) = self.user.set_auth_data(user, &mut self.storage) {
                            tracing::warn!(error = %e, "Could not persist user");
                        }
                        self.router.set_auth(true);
                        self.show_login = false;
                        self.login.reset();
                        self.status = Some(format!("Signed in as {}", username));
                        tracing::info!(username = %username, "User signed in");

                        // A private path typed before signing in may resolve now
                        if self.router.resolve(&self.path) != self.route {
                            let path = self.path.clone();
                            return self.navigate(&path);
                        }
                    }
                    Err(message) => {
                        self.login.is_loading = false;
                        self.login.error = Some(message);
                    }
                }
            }
            NetworkResponse::ProfileFetched { id, result } => {
                if self.pending_fetch != Some(id) {
                    tracing::debug!(id, "Dropping stale profile fetch");
                    return None;
                }
                self.pending_fetch = None;
                match result {
                    Ok(profile) => self.profile.fetch_fulfilled(profile),
                    Err(message) => self.profile.fetch_rejected(message),
                }
            }
            NetworkResponse::ProfileUpdated { id, result } => {
                if self.pending_update != Some(id) {
                    tracing::warn!(id, "Dropping stale profile update");
                    return None;
                }
                self.pending_update = None;
                match result {
                    Ok(profile) => {
                        self.profile.update_fulfilled(profile);
                        self.status = Some(String::from("Profile saved"));
                    }
                    Err(errors) => {
                        tracing::info!(?errors, "Profile update rejected");
                        self.profile.update_rejected(errors);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::selectors::{
        get_profile_data, get_profile_error, get_profile_validate_errors,
    };
    use crate::entities::{Profile, User, ValidateProfileError};
    use crate::storage::LocalStorage;
    use crate::theme::Theme;

    fn user() -> User {
        User {
            id: String::from("1"),
            username: String::from("admin"),
            avatar: None,
            token: Some(String::from("t0k")),
        }
    }

    fn profile() -> Profile {
        Profile {
            first_name: String::from("Ann"),
            last_name: String::from("Lee"),
            age: Some(30),
            currency: Some(Currency::RUB),
            country: Some(Country::Russia),
            city: String::from("Moscow"),
            username: String::from("ann"),
            avatar: String::new(),
        }
    }

    fn signed_in_state() -> AppState {
        let mut storage = LocalStorage::in_memory();
        storage
            .set(crate::constants::USER_LOCAL_STORAGE_KEY, serde_json::to_string(&user()).unwrap())
            .unwrap();
        AppState::new(storage)
    }

    /// Signed in, on the profile page with a loaded profile in edit mode
    fn editing_state() -> AppState {
        let mut state = signed_in_state();
        let id = match state.navigate("/profile") {
            Some(NetworkCommand::FetchProfile { id, .. }) => id,
            other => panic!("expected a profile fetch, got {:?}", other),
        };
        state.handle_response(NetworkResponse::ProfileFetched {
            id,
            result: Ok(profile()),
        });
        state.edit_profile();
        state
    }

    fn update_id(cmd: Option<NetworkCommand>) -> u64 {
        match cmd {
            Some(NetworkCommand::UpdateProfile { id, .. }) => id,
            other => panic!("expected an update command, got {:?}", other),
        }
    }

    #[test]
    fn test_startup_restores_theme_and_user() {
        let mut storage = LocalStorage::in_memory();
        storage.set(crate::constants::LOCAL_STORAGE_THEME_KEY, "dark").unwrap();
        storage
            .set(crate::constants::USER_LOCAL_STORAGE_KEY, serde_json::to_string(&user()).unwrap())
            .unwrap();

        let state = AppState::new(storage);
        assert!(state.user.inited);
        assert_eq!(state.theme.theme(), Theme::Dark);
        assert_eq!(get_user_auth_data(&state), Some(&user()));
        assert!(state.router.is_visible(AppRoute::Profile));
    }

    #[test]
    fn test_anonymous_profile_path_is_not_found() {
        let mut state = AppState::new(LocalStorage::in_memory());
        assert!(state.navigate("/profile").is_none());
        assert_eq!(state.route, AppRoute::NotFound);
    }

    #[test]
    fn test_navigation_bumps_sequence() {
        let mut state = AppState::new(LocalStorage::in_memory());
        state.navigate_index(1);
        assert_eq!(state.route, AppRoute::About);
        assert_eq!(state.navigation_seq, 1);
        state.reload();
        assert_eq!(state.navigation_seq, 2);
        assert!(state.navigate_index(7).is_none());
        assert_eq!(state.route, AppRoute::About);
    }

    #[test]
    fn test_login_success_reveals_private_route() {
        let mut state = AppState::new(LocalStorage::in_memory());
        state.navigate("/profile");
        state.open_login();
        for c in "admin".chars() {
            state.login_char(c);
        }
        let Some(NetworkCommand::Login { id, credentials }) = state.submit_login() else {
            panic!("expected a login command");
        };
        assert_eq!(credentials.username, "admin");

        let follow_up = state.handle_response(NetworkResponse::LoginResult { id, result: Ok(user()) });
        assert!(!state.show_login);
        assert_eq!(state.route, AppRoute::Profile);
        assert!(matches!(follow_up, Some(NetworkCommand::FetchProfile { .. })));
        assert!(state.storage.get(crate::constants::USER_LOCAL_STORAGE_KEY).is_some());
    }

    #[test]
    fn test_login_failure_sets_error() {
        let mut state = AppState::new(LocalStorage::in_memory());
        state.open_login();
        assert!(state.submit_login().is_none());
        assert!(state.login.error.is_some());

        state.login_char('a');
        let Some(NetworkCommand::Login { id, .. }) = state.submit_login() else {
            panic!("expected a login command");
        };
        state.handle_response(NetworkResponse::LoginResult {
            id,
            result: Err(String::from("Incorrect username or password")),
        });
        assert!(state.show_login);
        assert!(!state.login.is_loading);
        assert_eq!(state.login.error.as_deref(), Some("Incorrect username or password"));
    }

    #[test]
    fn test_logout_leaves_private_route() {
        let mut state = editing_state();
        state.logout();
        assert_eq!(state.route, AppRoute::Main);
        assert_eq!(get_profile_data(&state), None);
        assert!(!state.router.is_visible(AppRoute::Profile));
    }

    #[test]
    fn test_save_success_commits_server_copy() {
        let mut state = editing_state();
        state.active_field = ProfileField::City;
        state.start_editing();
        state.delete_char();
        state.enter_char('w');

        let id = update_id(state.save_profile());
        assert!(state.profile.is_loading);
        assert_eq!(state.input_mode, InputMode::Normal);

        let server_copy = Profile {
            city: String::from("Moscow (confirmed)"),
            ..profile()
        };
        state.handle_response(NetworkResponse::ProfileUpdated {
            id,
            result: Ok(server_copy.clone()),
        });
        assert_eq!(get_profile_data(&state), Some(&server_copy));
        assert_eq!(get_profile_form(&state), Some(&server_copy));
        assert!(state.profile.readonly);
        assert!(state.profile.last_saved_at.is_some());
    }

    #[test]
    fn test_save_failure_keeps_draft_and_committed_copy() {
        let mut state = editing_state();
        state.active_field = ProfileField::FirstName;
        state.start_editing();
        state.enter_char('!');
        let draft = get_profile_form(&state).cloned();

        let id = update_id(state.save_profile());
        state.handle_response(NetworkResponse::ProfileUpdated {
            id,
            result: Err(vec![ValidateProfileError::ServerError]),
        });

        assert_eq!(get_profile_data(&state), Some(&profile()));
        assert_eq!(get_profile_form(&state).cloned(), draft);
        assert_eq!(get_profile_validate_errors(&state), &[ValidateProfileError::ServerError]);
        assert!(!state.profile.readonly);
    }

    #[test]
    fn test_second_save_blocked_while_pending() {
        let mut state = editing_state();
        assert!(state.save_profile().is_some());
        assert!(state.save_profile().is_none());
    }

    #[test]
    fn test_stale_update_is_dropped() {
        let mut state = editing_state();
        let first = update_id(state.save_profile());
        state.handle_response(NetworkResponse::ProfileUpdated {
            id: first,
            result: Err(vec![ValidateProfileError::ServerError]),
        });
        let second = update_id(state.save_profile());

        state.handle_response(NetworkResponse::ProfileUpdated {
            id: first,
            result: Ok(Profile::default()),
        });
        assert!(state.profile.is_loading);
        assert_eq!(get_profile_data(&state), Some(&profile()));

        state.handle_response(NetworkResponse::ProfileUpdated {
            id: second,
            result: Ok(profile()),
        });
        assert!(!state.profile.is_loading);
    }

    #[test]
    fn test_cancel_reverts_edits() {
        let mut state = editing_state();
        state.active_field = ProfileField::Country;
        state.select_next();
        assert_eq!(get_profile_form(&state).and_then(|p| p.country), Some(Country::Belarus));

        state.cancel_edit();
        assert_eq!(get_profile_form(&state), Some(&profile()));
        assert!(state.profile.readonly);
    }

    #[test]
    fn test_age_editing_parses_digits() {
        let mut state = editing_state();
        state.active_field = ProfileField::Age;
        state.start_editing();
        state.delete_char();
        state.delete_char();
        state.enter_char('4');
        state.enter_char('1');
        assert_eq!(get_profile_form(&state).and_then(|p| p.age), Some(41));

        state.enter_char('x');
        assert_eq!(get_profile_form(&state).and_then(|p| p.age), None);
        assert_eq!(state.edit_buffer, "41x");
    }

    #[test]
    fn test_readonly_profile_ignores_edits() {
        let mut state = editing_state();
        state.cancel_edit();
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
        state.active_field = ProfileField::Currency;
        state.select_next();
        assert_eq!(get_profile_form(&state), Some(&profile()));
        assert!(state.save_profile().is_none());
    }

    #[test]
    fn test_fetch_skipped_while_editing() {
        let mut state = editing_state();
        assert!(state.reload().is_none());
    }

    #[test]
    fn test_fetch_failure_sets_error() {
        let mut state = signed_in_state();
        let id = match state.navigate("/profile") {
            Some(NetworkCommand::FetchProfile { id, .. }) => id,
            other => panic!("expected a profile fetch, got {:?}", other),
        };
        state.handle_response(NetworkResponse::ProfileFetched {
            id,
            result: Err(String::from("Could not load the profile")),
        });
        assert_eq!(get_profile_error(&state), Some("Could not load the profile"));
        assert!(!state.profile.is_loading);
        assert!(state.reload().is_some());
    }

    #[test]
    fn test_path_input_navigates() {
        let mut state = AppState::new(LocalStorage::in_memory());
        state.open_path_input();
        state.path_backspace();
        for c in "about".chars() {
            state.path_char(c);
        }
        state.submit_path();
        assert_eq!(state.route, AppRoute::About);
        assert_eq!(state.path, "/about");
        assert!(!state.show_path_input);
    }

    #[test]
    fn test_token_sent_only_when_present() {
        let mut state = signed_in_state();
        match state.navigate("/profile") {
            Some(NetworkCommand::FetchProfile { token, .. }) => {
                assert_eq!(token.as_deref(), Some("t0k"))
            }
            other => panic!("expected a profile fetch, got {:?}", other),
        }

        let mut storage = LocalStorage::in_memory();
        let tokenless = User { token: None, ..user() };
        storage
            .set(crate::constants::USER_LOCAL_STORAGE_KEY, serde_json::to_string(&tokenless).unwrap())
            .unwrap();
        let mut state = AppState::new(storage);
        match state.navigate("/profile") {
            Some(NetworkCommand::FetchProfile { token, .. }) => assert_eq!(token, None),
            other => panic!("expected a profile fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_theme_write_failure_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut state = AppState::new(LocalStorage::open(blocker.join("store.json")));

        state.toggle_theme();
        assert_eq!(state.theme.theme(), Theme::Dark);
        assert!(state
            .status
            .as_deref()
            .is_some_and(|s| s.starts_with("Theme not saved")));
    }

    #[test]
    fn test_render_state_mirrors_profile_slice() {
        let mut state = editing_state();
        let id = update_id(state.save_profile());
        state.handle_response(NetworkResponse::ProfileUpdated {
            id,
            result: Ok(profile()),
        });

        let render = state.to_render_state();
        assert_eq!(render.profile, state.profile);
        assert!(render.profile.last_saved_at.is_some());
    }
}
