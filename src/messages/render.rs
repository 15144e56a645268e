//! Render state - data structure sent from App layer to UI for rendering

use crate::entities::{LoginSchema, ProfileField, ProfileSchema, User};
use crate::messages::ui_events::{InputMode, KeyContext};
use crate::router::{AppRoute, RouteDescriptor};
use crate::theme::Theme;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Shell
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub sidebar_items: Vec<RouteDescriptor>,
    pub user: Option<User>,

    // Routing
    pub route: AppRoute,
    pub path: String,
    /// Bumped on every navigation, including reloads
    pub navigation_seq: u64,

    // Profile page
    pub profile: ProfileSchema,
    pub active_field: ProfileField,
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub cursor_position: usize,

    // Popups
    pub login: LoginSchema,
    pub show_login: bool,
    pub show_help: bool,
    pub show_path_input: bool,
    pub path_input: String,

    pub status: Option<String>,
}

impl RenderState {
    pub fn is_auth(&self) -> bool {
        self.user.is_some()
    }

    /// Context used to interpret the next key press
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            route: self.route,
            input_mode: self.input_mode,
            is_auth: self.is_auth(),
            profile_readonly: self.profile.readonly,
            field_is_select: self.active_field.is_select(),
            show_help: self.show_help,
            show_login: self.show_login,
            show_path_input: self.show_path_input,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            theme: Theme::default(),
            sidebar_collapsed: false,
            sidebar_items: Vec::new(),
            user: None,
            route: AppRoute::Main,
            path: String::from("/"),
            navigation_seq: 0,
            profile: ProfileSchema::default(),
            active_field: ProfileField::default(),
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            cursor_position: 0,
            login: LoginSchema::default(),
            show_login: false,
            show_help: false,
            show_path_input: false,
            path_input: String::new(),
            status: None,
        }
    }
}
