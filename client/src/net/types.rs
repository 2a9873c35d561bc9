//! Shared HTTP DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server links these same types, so the JSON shapes the forms submit and
//! the handlers accept cannot drift apart.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sign-in request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up request body. The confirmation field never leaves the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn bearer() -> String {
    "bearer".to_owned()
}

/// Successful sign-in response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token.
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    /// Server-side session record id.
    #[serde(default)]
    pub session_id: Option<i64>,
    /// Display name of the signed-in user.
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Successful sign-up response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Error body returned by every API failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: Some(detail.into()) }
    }
}

/// Logout response; `ended` is false when the session was already closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub ended: bool,
}

/// `PATCH /api/user/profile` body. Absent fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Account details as stored after a profile update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// `POST /api/user/change-password` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChanged {
    pub success: bool,
}

/// Demo collection entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// `GET /items` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}
