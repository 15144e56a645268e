use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Country, Currency};

/// User profile as exchanged with `/profile`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, rename = "first")]
    pub first_name: String,
    #[serde(default, rename = "lastname")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
}

/// Reasons a profile save can be rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidateProfileError {
    IncorrectUserData,
    IncorrectAge,
    IncorrectCountry,
    NoData,
    ServerError,
}

impl ValidateProfileError {
    /// Message shown next to the form
    pub fn message(&self) -> &'static str {
        match self {
            ValidateProfileError::IncorrectUserData => "First and last name are required",
            ValidateProfileError::IncorrectAge => "Age must be a positive whole number",
            ValidateProfileError::IncorrectCountry => "Country is required",
            ValidateProfileError::NoData => "No profile data",
            ValidateProfileError::ServerError => "Server error while saving the profile",
        }
    }
}

/// Editable field of the profile card, in display order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileField {
    #[default]
    FirstName,
    LastName,
    Age,
    City,
    Username,
    Avatar,
    Currency,
    Country,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Age,
        ProfileField::City,
        ProfileField::Username,
        ProfileField::Avatar,
        ProfileField::Currency,
        ProfileField::Country,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name",
            ProfileField::LastName => "Last name",
            ProfileField::Age => "Age",
            ProfileField::City => "City",
            ProfileField::Username => "Username",
            ProfileField::Avatar => "Avatar URL",
            ProfileField::Currency => "Currency",
            ProfileField::Country => "Country",
        }
    }

    /// Select fields cycle through options instead of taking text
    pub fn is_select(&self) -> bool {
        matches!(self, ProfileField::Currency | ProfileField::Country)
    }

    pub fn next(&self) -> ProfileField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> ProfileField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Profile {
    /// Text shown for `field`
    pub fn field_text(&self, field: ProfileField) -> String {
        match field {
            ProfileField::FirstName => self.first_name.clone(),
            ProfileField::LastName => self.last_name.clone(),
            ProfileField::Age => self.age.map(|a| a.to_string()).unwrap_or_default(),
            ProfileField::City => self.city.clone(),
            ProfileField::Username => self.username.clone(),
            ProfileField::Avatar => self.avatar.clone(),
            ProfileField::Currency => self
                .currency
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            ProfileField::Country => self
                .country
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Replace a text field. Age text that is not a number clears the age.
    pub fn set_field_text(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Age => self.age = value.trim().parse().ok(),
            ProfileField::City => self.city = value,
            ProfileField::Username => self.username = value,
            ProfileField::Avatar => self.avatar = value,
            ProfileField::Currency | ProfileField::Country => {}
        }
    }
}

/// Profile slice: committed copy, draft and request status
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSchema {
    /// Last server-confirmed profile
    pub data: Option<Profile>,
    /// Draft being edited
    pub form: Option<Profile>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub readonly: bool,
    pub validate_errors: Vec<ValidateProfileError>,
    pub last_saved_at: Option<DateTime<Utc>>,
}

impl Default for ProfileSchema {
    fn default() -> Self {
        ProfileSchema {
            data: None,
            form: None,
            is_loading: false,
            error: None,
            readonly: true,
            validate_errors: Vec::new(),
            last_saved_at: None,
        }
    }
}

impl ProfileSchema {
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Drop the draft and go back to the committed copy
    pub fn cancel_edit(&mut self) {
        self.readonly = true;
        self.form = self.data.clone();
        self.validate_errors.clear();
    }

    pub fn update_profile(&mut self, f: impl FnOnce(&mut Profile)) {
        let form = self.form.get_or_insert_with(Profile::default);
        f(form);
    }

    // Profile fetch lifecycle

    pub fn fetch_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fetch_fulfilled(&mut self, profile: Profile) {
        self.is_loading = false;
        self.form = Some(profile.clone());
        self.data = Some(profile);
    }

    pub fn fetch_rejected(&mut self, error: String) {
        self.is_loading = false;
        self.error = Some(error);
    }

    // Profile save lifecycle

    pub fn update_pending(&mut self) {
        self.is_loading = true;
        self.validate_errors.clear();
    }

    pub fn update_fulfilled(&mut self, profile: Profile) {
        self.is_loading = false;
        self.readonly = true;
        self.validate_errors.clear();
        self.form = Some(profile.clone());
        self.data = Some(profile);
        self.last_saved_at = Some(Utc::now());
    }

    pub fn update_rejected(&mut self, errors: Vec<ValidateProfileError>) {
        self.is_loading = false;
        self.validate_errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"first":"Ann","lastname":"Lee","age":30,"currency":"USD","country":"Armenia","city":"Yerevan","username":"ann","avatar":"https://x/a.png"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.first_name, "Ann");
        assert_eq!(profile.last_name, "Lee");
        assert_eq!(profile.country, Some(Country::Armenia));

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["first"], "Ann");
        assert_eq!(value["lastname"], "Lee");
    }

    #[test]
    fn test_error_tags_serialize_screaming_snake() {
        let json = serde_json::to_string(&ValidateProfileError::IncorrectUserData).unwrap();
        assert_eq!(json, "\"INCORRECT_USER_DATA\"");
    }

    #[test]
    fn test_age_text_parsing() {
        let mut profile = Profile::default();
        profile.set_field_text(ProfileField::Age, String::from(" 42 "));
        assert_eq!(profile.age, Some(42));
        profile.set_field_text(ProfileField::Age, String::from("4x"));
        assert_eq!(profile.age, None);
    }

    #[test]
    fn test_cancel_reverts_draft() {
        let saved = Profile {
            first_name: String::from("Ann"),
            ..Profile::default()
        };
        let mut slice = ProfileSchema::default();
        slice.fetch_fulfilled(saved.clone());
        slice.set_readonly(false);
        slice.update_profile(|p| p.first_name = String::from("Bob"));
        slice.validate_errors = vec![ValidateProfileError::IncorrectAge];

        slice.cancel_edit();
        assert_eq!(slice.form, Some(saved));
        assert!(slice.readonly);
        assert!(slice.validate_errors.is_empty());
    }

    #[test]
    fn test_rejected_update_keeps_draft_and_data() {
        let saved = Profile {
            first_name: String::from("Ann"),
            ..Profile::default()
        };
        let mut slice = ProfileSchema::default();
        slice.fetch_fulfilled(saved.clone());
        slice.update_profile(|p| p.city = String::from("Minsk"));
        let draft = slice.form.clone();

        slice.update_pending();
        slice.update_rejected(vec![ValidateProfileError::ServerError]);

        assert_eq!(slice.data, Some(saved));
        assert_eq!(slice.form, draft);
        assert_eq!(slice.validate_errors, vec![ValidateProfileError::ServerError]);
        assert!(!slice.is_loading);
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(ProfileField::Country.next(), ProfileField::FirstName);
        assert_eq!(ProfileField::FirstName.prev(), ProfileField::Country);
    }
}
