use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use super::jwt::JwtKeys;
use crate::error::ApiError;

/// Identity of the token holder, available to every protected handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // an empty value carries no credential, same as no header
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .filter(|v| !v.as_bytes().iter().all(u8::is_ascii_whitespace))
            .ok_or(ApiError::Unauthorized)?;

        let token = header
            .to_str()
            .ok()
            .and_then(bearer_token)
            .ok_or_else(|| {
                warn!("malformed Authorization header");
                ApiError::InvalidToken
            })?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser {
            id: claims.id,
            username: claims.username,
        })
    }
}

/// Returns the credential of a `Bearer <token>` value.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
