use serde::{Deserialize, Serialize};

use crate::auth::repo_types::{User, UserChanges};
use crate::error::{ensure_non_blank, ApiError};

/// Both fields optional; absent ones keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> Result<UserChanges, ApiError> {
        if let Some(name) = &self.name {
            ensure_non_blank("name", name)?;
        }
        if let Some(username) = &self.username {
            ensure_non_blank("username", username)?;
        }
        Ok(UserChanges {
            name: self.name,
            username: self.username,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub message: &'static str,
    pub user: User,
}
