//! # AppShell
//!
//! A themed terminal application shell with routing, sign-in and an
//! editable user profile backed by a REST API.
//!
//! ## Features
//! - Light/dark theme persisted in local storage
//! - Route table with auth-only pages and a not-found fallback
//! - Error boundary around the routed page
//! - Login/logout with the user kept across sessions
//! - Profile form with validation and a single-request save workflow
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (central store)
//! - Network Layer (Tokio runtime)

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod entities;
pub mod messages;
pub mod network;
pub mod router;
pub mod storage;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiError, ProfileApi};
pub use app::{AppActor, AppState};
pub use entities::{Country, Currency, Profile, User, ValidateProfileError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use network::{HttpApi, NetworkActor};
pub use router::{AppRoute, RouteDescriptor, ROUTE_CONFIG};
pub use theme::{Theme, ThemeContext};
