//! Backend API seam
//!
//! The network actor and the profile workflow talk to the backend only
//! through [`ProfileApi`], so tests can substitute an in-process fake.

use async_trait::async_trait;

use crate::entities::{Profile, User};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Credentials posted to `/login`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET /profile`
    async fn fetch_profile(&self, token: Option<&str>) -> Result<Option<Profile>, ApiError>;

    /// `PUT /profile`. `Ok(None)` means the server answered without a body.
    async fn put_profile(
        &self,
        token: Option<&str>,
        profile: &Profile,
    ) -> Result<Option<Profile>, ApiError>;

    /// `POST /login`
    async fn login(&self, credentials: &LoginRequest) -> Result<Option<User>, ApiError>;
}
