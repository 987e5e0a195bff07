//! Types for authentication and user management

use serde::{Deserialize, Serialize};

/// User record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user id
    #[serde(rename = "_id")]
    pub id: String,

    /// The user's first name
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,

    /// The user's email address
    #[serde(default)]
    pub email: Option<String>,

    /// The creation time, when the backend records one
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Payload for registering a new user
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response envelope from the login endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub token: String,

    #[serde(rename = "refreshToken")]
    pub refresh_token: String,

    #[serde(default)]
    pub user: Option<User>,
}

/// Response envelope from the registration endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct SignUpResponse {
    pub user: User,
}
