//! Network messages - communication between App and Network layers

use crate::api::LoginRequest;
use crate::entities::{Profile, User, ValidateProfileError};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Sign in with username and password
    Login { id: u64, credentials: LoginRequest },
    /// Load the signed-in user's profile
    FetchProfile { id: u64, token: Option<String> },
    /// Validate and save the profile draft
    UpdateProfile {
        id: u64,
        token: Option<String>,
        form: Option<Profile>,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    LoginResult {
        id: u64,
        result: Result<User, String>,
    },
    ProfileFetched {
        id: u64,
        result: Result<Profile, String>,
    },
    ProfileUpdated {
        id: u64,
        result: Result<Profile, Vec<ValidateProfileError>>,
    },
}
