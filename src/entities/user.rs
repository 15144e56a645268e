//! User entity - authentication data and the login form slice

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::USER_LOCAL_STORAGE_KEY;
use crate::storage::LocalStorage;

/// Authenticated user as returned by `POST /login`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// User slice
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserSchema {
    pub auth_data: Option<User>,
    /// Set once `init_auth_data` has run
    pub inited: bool,
}

impl UserSchema {
    /// Restore auth data saved by a previous session
    pub fn init_auth_data(&mut self, storage: &LocalStorage) {
        self.auth_data = storage
            .get(USER_LOCAL_STORAGE_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed stored user");
                    None
                }
            });
        self.inited = true;
    }

    pub fn set_auth_data(&mut self, user: User, storage: &mut LocalStorage) -> Result<()> {
        let raw = serde_json::to_string(&user)?;
        self.auth_data = Some(user);
        storage.set(USER_LOCAL_STORAGE_KEY, raw)
    }

    pub fn logout(&mut self, storage: &mut LocalStorage) -> Result<()> {
        self.auth_data = None;
        storage.remove(USER_LOCAL_STORAGE_KEY)
    }
}

/// Field focused in the login form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Login form slice
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginSchema {
    pub username: String,
    pub password: String,
    pub field: LoginField,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LoginSchema {
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn reset(&mut self) {
        *self = LoginSchema::default();
    }
}
