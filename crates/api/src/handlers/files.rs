//! Handlers for project file metadata.
//!
//! Blob upload/download happens against external object storage; these
//! endpoints track the metadata rows that reference it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use validator::Validate;

use bobbi_db::models::file::{CreateFile, ProjectFile, UpdateFile};
use bobbi_db::repositories::FileRepo;

use crate::access::{require_edit, require_view};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/files
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectFile>>> {
    require_view(&state, project_id, auth.user_id).await?;

    let files = FileRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(files))
}

/// POST /api/v1/projects/{id}/files
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateFile>,
) -> AppResult<(StatusCode, Json<ProjectFile>)> {
    require_edit(&state, project_id, auth.user_id).await?;
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let file = FileRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        file_id = %file.id,
        "File registered"
    );
    Ok((StatusCode::CREATED, Json(file)))
}

/// GET /api/v1/projects/{id}/files/{file_id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, file_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectFile>> {
    require_view(&state, project_id, auth.user_id).await?;

    let file = FileRepo::find_by_id(&state.pool, file_id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "File",
            id: file_id,
        }))?;
    Ok(Json(file))
}

/// PUT /api/v1/projects/{id}/files/{file_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, file_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateFile>,
) -> AppResult<Json<ProjectFile>> {
    require_edit(&state, project_id, auth.user_id).await?;

    let file = FileRepo::update(&state.pool, file_id, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "File",
            id: file_id,
        }))?;
    Ok(Json(file))
}

/// DELETE /api/v1/projects/{id}/files/{file_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, file_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    require_edit(&state, project_id, auth.user_id).await?;

    let deleted = FileRepo::delete(&state.pool, file_id, project_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "File",
            id: file_id,
        }))
    }
}
