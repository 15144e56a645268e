//! Network actor - runs backend calls in the Tokio async runtime

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::api::{ApiError, ProfileApi};
use crate::entities::{fetch_profile_data, update_profile_data};
use crate::messages::{NetworkCommand, NetworkResponse};

/// Network actor that executes commands against a [`ProfileApi`]
pub struct NetworkActor {
    api: Arc<dyn ProfileApi>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: Arc<dyn ProfileApi>, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Login { id, credentials }) => {
                            let api = Arc::clone(&self.api);
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Executing login");
                                let result = match api.login(&credentials).await {
                                    Ok(Some(user)) => Ok(user),
                                    Ok(None) => Err(String::from("Empty login response")),
                                    Err(e) => {
                                        tracing::warn!(id, error = %e, "Login failed");
                                        Err(login_error_message(&e))
                                    }
                                };
                                let _ = response_tx.send(NetworkResponse::LoginResult { id, result });
                            });
                        }

                        Some(NetworkCommand::FetchProfile { id, token }) => {
                            let api = Arc::clone(&self.api);
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching profile");
                                let result = fetch_profile_data(api.as_ref(), token.as_deref()).await;
                                let _ = response_tx.send(NetworkResponse::ProfileFetched { id, result });
                            });
                        }

                        Some(NetworkCommand::UpdateProfile { id, token, form }) => {
                            let api = Arc::clone(&self.api);
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Updating profile");
                                let result =
                                    update_profile_data(api.as_ref(), token.as_deref(), form.as_ref()).await;
                                tracing::info!(id, ok = result.is_ok(), "Profile update completed");
                                let _ = response_tx.send(NetworkResponse::ProfileUpdated { id, result });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

/// Only rejected credentials are reported as such
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status(401 | 403) => String::from("Incorrect username or password"),
        ApiError::Status(code) => format!("Server error ({})", code),
        ApiError::Decode(_) => String::from("Unexpected response from the server"),
        _ => String::from("Could not reach the server"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LoginRequest;
    use crate::entities::profile::service::tests::{valid_profile, FakeApi, PutReply};
    use crate::entities::{Profile, User, ValidateProfileError};

    fn spawn_actor(api: Arc<FakeApi>) -> (
        mpsc::UnboundedSender<NetworkCommand>,
        mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        tokio::spawn(NetworkActor::new(api, resp_tx).run(cmd_rx));
        (cmd_tx, resp_rx)
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let api = Arc::new(FakeApi::new(PutReply::Echo));
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::clone(&api));

        cmd_tx
            .send(NetworkCommand::UpdateProfile {
                id: 7,
                token: Some(String::from("t")),
                form: Some(valid_profile()),
            })
            .unwrap();

        let response = resp_rx.recv().await.unwrap();
        assert_eq!(
            response,
            NetworkResponse::ProfileUpdated {
                id: 7,
                result: Ok(valid_profile()),
            }
        );
        assert_eq!(api.put_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_update_never_reaches_api() {
        let api = Arc::new(FakeApi::new(PutReply::Echo));
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::clone(&api));

        cmd_tx
            .send(NetworkCommand::UpdateProfile {
                id: 1,
                token: None,
                form: Some(Profile::default()),
            })
            .unwrap();

        let response = resp_rx.recv().await.unwrap();
        assert_eq!(
            response,
            NetworkResponse::ProfileUpdated {
                id: 1,
                result: Err(vec![
                    ValidateProfileError::IncorrectUserData,
                    ValidateProfileError::IncorrectAge,
                    ValidateProfileError::IncorrectCountry,
                ]),
            }
        );
        assert_eq!(api.put_calls(), 0);
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let mut fake = FakeApi::new(PutReply::Echo);
        fake.login_reply = Some(User {
            id: String::from("1"),
            username: String::from("admin"),
            avatar: None,
            token: None,
        });
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::new(fake));

        cmd_tx
            .send(NetworkCommand::Login {
                id: 3,
                credentials: LoginRequest {
                    username: String::from("admin"),
                    password: String::from("wrong"),
                },
            })
            .unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::LoginResult { id, result } => {
                assert_eq!(id, 3);
                assert_eq!(result, Err(String::from("Incorrect username or password")));
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_unreachable_message() {
        let mut fake = FakeApi::new(PutReply::Echo);
        fake.login_unreachable = true;
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::new(fake));

        cmd_tx
            .send(NetworkCommand::Login {
                id: 4,
                credentials: LoginRequest {
                    username: String::from("admin"),
                    password: String::from("123"),
                },
            })
            .unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::LoginResult { result, .. } => {
                assert_eq!(result, Err(String::from("Could not reach the server")));
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_login_error_messages_by_cause() {
        assert_eq!(
            login_error_message(&ApiError::Status(401)),
            "Incorrect username or password"
        );
        assert_eq!(login_error_message(&ApiError::Status(502)), "Server error (502)");
        assert_eq!(
            login_error_message(&ApiError::Other(String::from("timed out"))),
            "Could not reach the server"
        );
    }

    #[tokio::test]
    async fn test_shutdown_stops_actor() {
        let api = Arc::new(FakeApi::new(PutReply::Echo));
        let (cmd_tx, resp_rx) = {
            let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
            let (resp_tx, resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
            let handle = tokio::spawn(NetworkActor::new(api, resp_tx).run(cmd_rx));
            cmd_tx.send(NetworkCommand::Shutdown).unwrap();
            handle.await.unwrap();
            (cmd_tx, resp_rx)
        };
        assert!(cmd_tx.send(NetworkCommand::Shutdown).is_err());
        drop(resp_rx);
    }
}
