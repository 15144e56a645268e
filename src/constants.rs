//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "APPSHELL_API_URL";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "appshell.log";

/// Name of the per-user config directory under $HOME
pub const CONFIG_DIR_NAME: &str = ".appshell";

/// Local storage key holding the theme preference
pub const LOCAL_STORAGE_THEME_KEY: &str = "theme";

/// Local storage key holding the serialized authenticated user
pub const USER_LOCAL_STORAGE_KEY: &str = "user";

/// Profile resource
pub const PROFILE_ENDPOINT: &str = "/profile";

/// Login resource
pub const LOGIN_ENDPOINT: &str = "/login";

/// Application name
pub const APP_NAME: &str = "AppShell";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
