use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;
use crate::error::{ensure_non_blank, ApiError};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        ensure_non_blank("name", &self.name)?;
        ensure_non_blank("username", &self.username)?;
        ensure_non_blank("password", &self.password)
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
