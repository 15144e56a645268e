use crate::entities::profile::{Profile, ValidateProfileError};

/// Check a draft before it is sent. Errors come back in field order; an
/// empty vector means the draft may be saved.
pub fn validate_profile_data(profile: Option<&Profile>) -> Vec<ValidateProfileError> {
    let Some(profile) = profile else {
        return vec![ValidateProfileError::NoData];
    };

    let mut errors = Vec::new();

    if profile.first_name.trim().is_empty() || profile.last_name.trim().is_empty() {
        errors.push(ValidateProfileError::IncorrectUserData);
    }

    if !matches!(profile.age, Some(age) if age > 0) {
        errors.push(ValidateProfileError::IncorrectAge);
    }

    if profile.country.is_none() {
        errors.push(ValidateProfileError::IncorrectCountry);
    }

    errors
}
