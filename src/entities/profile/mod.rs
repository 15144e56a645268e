//! Profile entity: record types, validation and the async save/fetch workflows

pub mod service;
pub mod types;
pub mod validate;

pub use service::{fetch_profile_data, update_profile_data};
pub use types::{Profile, ProfileField, ProfileSchema, ValidateProfileError};
pub use validate::validate_profile_data;
