//! Handlers for the `/me` resource: the authenticated user's own profile.

use axum::extract::State;
use axum::Json;
use bobbi_core::error::CoreError;
use validator::Validate;

use bobbi_db::models::user::{UpdateUser, User};
use bobbi_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(user))
}

/// PUT /api/v1/me
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = UserRepo::update(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = %auth.user_id, "Profile updated");
    Ok(Json(user))
}
