use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::{
        dto::{LoginRequest, SignupRequest, SignupResponse, TokenResponse},
        services::AuthService,
    },
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(auth, payload), fields(username = %payload.username))]
pub async fn signup(
    State(auth): State<AuthService>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    payload.validate()?;
    let user = auth.signup(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered",
            user,
        }),
    ))
}

#[instrument(skip(auth, payload), fields(username = %payload.username))]
pub async fn login(
    State(auth): State<AuthService>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = auth.login(payload).await?;
    Ok(Json(TokenResponse { token }))
}
