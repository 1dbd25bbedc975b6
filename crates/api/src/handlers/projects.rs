//! Handlers for the `/projects` resource.
//!
//! Single-project reads return the row together with the caller's resolved
//! access so the frontend can gate its own controls without a second
//! request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::access::ProjectAccess;
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use serde::Serialize;
use validator::Validate;

use bobbi_db::models::project::{CreateProject, Project, UpdateProject};
use bobbi_db::repositories::ProjectRepo;

use crate::access::{require_delete, require_edit, require_view};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A project together with the caller's resolved access.
#[derive(Debug, Serialize)]
pub struct ProjectWithAccess {
    #[serde(flatten)]
    pub project: Project,
    pub access: ProjectAccess,
}

/// POST /api/v1/projects
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let project = ProjectRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(user_id = %auth.user_id, project_id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Lists every project the caller owns or actively collaborates on.
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithAccess>> {
    let (project, access) = require_view(&state, id, auth.user_id).await?;
    Ok(Json(ProjectWithAccess { project, access }))
}

/// GET /api/v1/projects/{id}/access
///
/// Returns only the caller's resolved access on the project.
pub async fn get_access(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectAccess>>> {
    let (_, access) = require_view(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: access }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    require_edit(&state, id, auth.user_id).await?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_delete(&state, id, auth.user_id).await?;

    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = %auth.user_id, project_id = %id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
