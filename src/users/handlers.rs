use axum::{
    extract::State,
    routing::put,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{UpdateUserRequest, UpdateUserResponse};
use crate::{
    auth::AuthUser,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:id", put(update_user))
}

#[instrument(skip(state, auth, payload), fields(caller = auth.id))]
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let changes = payload.into_changes()?;
    let Some(user) = state.users.update(id, changes).await? else {
        warn!(id, "update of unknown user");
        return Err(ApiError::NotFound("User not found"));
    };
    info!(user_id = user.id, "user updated");
    Ok(Json(UpdateUserResponse {
        message: "User updated",
        user,
    }))
}
