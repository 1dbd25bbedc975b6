//! Handlers for project tasks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use validator::Validate;

use bobbi_db::models::task::{CreateTask, Task, UpdateTask};
use bobbi_db::repositories::TaskRepo;

use crate::access::{require_edit, require_view};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/tasks
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    require_view(&state, project_id, auth.user_id).await?;

    let tasks = TaskRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// POST /api/v1/projects/{id}/tasks
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    require_edit(&state, project_id, auth.user_id).await?;
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let task = TaskRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        task_id = %task.id,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/projects/{id}/tasks/{task_id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    require_view(&state, project_id, auth.user_id).await?;

    let task = TaskRepo::find_by_id(&state.pool, task_id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(Json(task))
}

/// PUT /api/v1/projects/{id}/tasks/{task_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    require_edit(&state, project_id, auth.user_id).await?;

    let task = TaskRepo::update(&state.pool, task_id, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/projects/{id}/tasks/{task_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    require_edit(&state, project_id, auth.user_id).await?;

    let deleted = TaskRepo::delete(&state.pool, task_id, project_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))
    }
}
