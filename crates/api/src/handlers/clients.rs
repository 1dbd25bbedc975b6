//! Handlers for the `/clients` resource.
//!
//! Clients are strictly personal: every query is scoped to the
//! authenticated user, so there is no access resolution to run.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use validator::Validate;

use bobbi_db::models::client::{Client, CreateClient, UpdateClient};
use bobbi_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let client = ClientRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(user_id = %auth.user_id, client_id = %client.id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let client = ClientRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id, auth.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
