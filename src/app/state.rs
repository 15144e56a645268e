//! App state - pure data structure with no I/O logic besides local storage

use crate::app::selectors::{
    get_login_state, get_profile_data, get_profile_error, get_profile_form, get_profile_is_loading,
    get_profile_last_saved_at, get_profile_readonly, get_profile_validate_errors, get_theme,
    get_user_auth_data,
};
use crate::entities::{LoginSchema, ProfileField, ProfileSchema, UserSchema};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::router::{AppRoute, Router, ROUTE_CONFIG};
use crate::storage::LocalStorage;
use crate::theme::ThemeContext;

/// The central store. Only the App actor mutates it.
pub struct AppState {
    // Injected client storage
    pub storage: LocalStorage,

    // Contexts and slices
    pub theme: ThemeContext,
    pub user: UserSchema,
    pub login: LoginSchema,
    pub profile: ProfileSchema,

    // Routing
    pub router: Router,
    pub route: AppRoute,
    pub path: String,
    pub navigation_seq: u64,

    // Shell
    pub sidebar_collapsed: bool,

    // Profile editing
    pub active_field: ProfileField,
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub cursor_position: usize,

    // Popups
    pub show_login: bool,
    pub show_help: bool,
    pub show_path_input: bool,
    pub path_input: String,

    pub status: Option<String>,

    // Request bookkeeping
    pub next_request_id: u64,
    pub pending_login: Option<u64>,
    pub pending_fetch: Option<u64>,
    pub pending_update: Option<u64>,
}

impl AppState {
    /// Build the store from persisted client state: theme and auth data
    pub fn new(storage: LocalStorage) -> Self {
        let theme = ThemeContext::init(&storage);
        let mut user = UserSchema::default();
        user.init_auth_data(&storage);
        let router = Router::new(ROUTE_CONFIG, user.auth_data.is_some());

        AppState {
            storage,
            theme,
            user,
            login: LoginSchema::default(),
            profile: ProfileSchema::default(),
            router,
            route: AppRoute::Main,
            path: String::from("/"),
            navigation_seq: 0,
            sidebar_collapsed: false,
            active_field: ProfileField::default(),
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            cursor_position: 0,
            show_login: false,
            show_help: false,
            show_path_input: false,
            path_input: String::new(),
            status: None,
            next_request_id: 1,
            pending_login: None,
            pending_fetch: None,
            pending_update: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            theme: get_theme(self),
            sidebar_collapsed: self.sidebar_collapsed,
            sidebar_items: self.router.sidebar_items(),
            user: get_user_auth_data(self).cloned(),
            route: self.route,
            path: self.path.clone(),
            navigation_seq: self.navigation_seq,
            profile: ProfileSchema {
                data: get_profile_data(self).cloned(),
                form: get_profile_form(self).cloned(),
                is_loading: get_profile_is_loading(self),
                error: get_profile_error(self).map(str::to_string),
                readonly: get_profile_readonly(self),
                validate_errors: get_profile_validate_errors(self).to_vec(),
                last_saved_at: get_profile_last_saved_at(self),
            },
            active_field: self.active_field,
            input_mode: self.input_mode,
            edit_buffer: self.edit_buffer.clone(),
            cursor_position: self.cursor_position,
            login: get_login_state(self).clone(),
            show_login: self.show_login,
            show_help: self.show_help,
            show_path_input: self.show_path_input,
            path_input: self.path_input.clone(),
            status: self.status.clone(),
        }
    }
}
