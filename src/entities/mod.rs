//! Domain entities - typed records, validation and per-entity state slices

pub mod country;
pub mod currency;
pub mod profile;
pub mod user;

pub use country::Country;
pub use currency::Currency;
pub use profile::{
    fetch_profile_data, update_profile_data, Profile, ProfileField, ProfileSchema, ValidateProfileError,
};
pub use user::{LoginField, LoginSchema, User, UserSchema};
