//! Async profile workflows

use crate::api::ProfileApi;
use crate::entities::profile::{validate_profile_data, Profile, ValidateProfileError};

/// Validate `form` and, if it passes, `PUT` it to the backend.
///
/// Validation failures return without touching the network. Any transport
/// failure, non-2xx status or missing/malformed body collapses to
/// `[ServerError]`. On success the server's copy is returned.
pub async fn update_profile_data(
    api: &dyn ProfileApi,
    token: Option<&str>,
    form: Option<&Profile>,
) -> Result<Profile, Vec<ValidateProfileError>> {
    let errors = validate_profile_data(form);
    if !errors.is_empty() {
        return Err(errors);
    }
    let Some(form) = form else {
        return Err(vec![ValidateProfileError::NoData]);
    };

    match api.put_profile(token, form).await {
        Ok(Some(profile)) => Ok(profile),
        Ok(None) => {
            tracing::warn!("Profile update returned an empty body");
            Err(vec![ValidateProfileError::ServerError])
        }
        Err(e) => {
            tracing::warn!(error = %e, "Profile update failed");
            Err(vec![ValidateProfileError::ServerError])
        }
    }
}

/// Load the profile for the signed-in user
pub async fn fetch_profile_data(api: &dyn ProfileApi, token: Option<&str>) -> Result<Profile, String> {
    match api.fetch_profile(token).await {
        Ok(Some(profile)) => Ok(profile),
        Ok(None) => Err(String::from("Profile not found")),
        Err(e) => {
            tracing::warn!(error = %e, "Profile fetch failed");
            Err(String::from("Could not load the profile"))
        }
    }
}
