use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,              // server-generated
    pub name: String,         // display name
    pub username: String,     // unique
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String, // Argon2 PHC string, never exposed in JSON
}

/// Row to insert on signup; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password_hash: String,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub username: Option<String>,
}
