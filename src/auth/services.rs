use std::sync::Arc;

use axum::extract::FromRef;
use tracing::{info, warn};

use crate::auth::{
    dto::{LoginRequest, SignupRequest},
    jwt::JwtKeys,
    password::PasswordHasher,
    repo::UserStore,
    repo_types::{NewUser, User},
};
use crate::error::ApiError;
use crate::state::AppState;

/// Signup and login over a user store, the token keys and the password hasher.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    keys: JwtKeys,
    hasher: PasswordHasher,
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.users.clone(), state.keys.clone(), state.hasher.clone())
    }
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, keys: JwtKeys, hasher: PasswordHasher) -> Self {
        Self {
            users,
            keys,
            hasher,
        }
    }

    pub async fn signup(&self, req: SignupRequest) -> Result<User, ApiError> {
        let SignupRequest {
            name,
            username,
            password,
        } = req;
        let hasher = self.hasher.clone();
        let password_hash = blocking(move || hasher.hash(&password)).await?;
        let user = self
            .users
            .create(NewUser {
                name,
                username,
                password_hash,
            })
            .await?;
        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Unknown username and wrong password fail identically.
    pub async fn login(&self, req: LoginRequest) -> Result<String, ApiError> {
        let LoginRequest { username, password } = req;
        let hasher = self.hasher.clone();
        let Some(user) = self.users.find_by_username(&username).await? else {
            blocking(move || {
                hasher.verify_absent(&password);
                Ok(())
            })
            .await?;
            warn!(%username, "login unknown username");
            return Err(ApiError::InvalidCredentials);
        };

        let stored = user.password_hash.clone();
        let ok = blocking(move || hasher.verify(&password, &stored)).await?;
        if !ok {
            warn!(user_id = user.id, "login invalid password");
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.keys.sign(user.id, &user.username)?;
        info!(user_id = user.id, "user logged in");
        Ok(token)
    }
}

async fn blocking<T, F>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
