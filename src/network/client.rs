//! HTTP client wrapper - the reqwest implementation of [`ProfileApi`]

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{ApiError, LoginRequest, ProfileApi};
use crate::constants::{LOGIN_ENDPOINT, PROFILE_ENDPOINT};
use crate::entities::{Profile, User};

/// Backend reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        HttpApi {
            client: create_client(timeout),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send the request and decode an optional JSON body
    async fn send<T: DeserializeOwned>(
        &self,
        req_builder: RequestBuilder,
        token: Option<&str>,
    ) -> Result<Option<T>, ApiError> {
        let req_builder = match token {
            Some(token) => req_builder.header("Authorization", token),
            None => req_builder,
        };

        let resp = req_builder.header("Accept", "application/json").send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        decode_body(&body)
    }
}

#[async_trait]
impl ProfileApi for HttpApi {
    async fn fetch_profile(&self, token: Option<&str>) -> Result<Option<Profile>, ApiError> {
        let url = self.url(PROFILE_ENDPOINT);
        tracing::info!(url = %url, "GET profile");
        self.send(self.client.get(&url), token).await
    }

    async fn put_profile(
        &self,
        token: Option<&str>,
        profile: &Profile,
    ) -> Result<Option<Profile>, ApiError> {
        let url = self.url(PROFILE_ENDPOINT);
        tracing::info!(url = %url, "PUT profile");
        self.send(self.client.put(&url).json(profile), token).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<Option<User>, ApiError> {
        let url = self.url(LOGIN_ENDPOINT);
        tracing::info!(url = %url, username = %credentials.username, "POST login");
        self.send(self.client.post(&url).json(credentials), None).await
    }
}

/// Empty bodies and a bare `null` decode to `None`
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(trimmed)?))
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_null_bodies_have_no_payload() {
        assert!(matches!(decode_body::<Profile>(""), Ok(None)));
        assert!(matches!(decode_body::<Profile>("  \n"), Ok(None)));
        assert!(matches!(decode_body::<Profile>("null"), Ok(None)));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(decode_body::<Profile>("{\"first\":"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_profile_body_decodes() {
        let profile = decode_body::<Profile>(r#"{"first":"Ann","lastname":"Lee","age":30}"#)
            .unwrap()
            .unwrap();
        assert_eq!(profile.first_name, "Ann");
        assert_eq!(profile.age, Some(30));
    }

    #[test]
    fn test_url_join_ignores_trailing_slash() {
        let api = HttpApi::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(api.url(PROFILE_ENDPOINT), "http://localhost:8000/profile");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let api = HttpApi::new("http://127.0.0.1:9", Duration::from_secs(2));
        let result = api.fetch_profile(None).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
