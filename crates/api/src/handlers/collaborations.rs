//! Handlers for project collaborations.
//!
//! Any viewer can list a project's collaborations; only the owner can
//! invite, change, or (together with the collaborator themself) remove
//! them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::access::is_owner;
use bobbi_core::collaboration::{statuses, validate_status, Permissions};
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;

use bobbi_db::models::collaboration::{Collaboration, CreateCollaboration, UpdateCollaboration};
use bobbi_db::repositories::{CollaborationRepo, UserRepo};

use crate::access::{require_owner, require_view};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/collaborations
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Collaboration>>> {
    require_view(&state, project_id, auth.user_id).await?;

    let collaborations = CollaborationRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(collaborations))
}

/// POST /api/v1/projects/{id}/collaborations
///
/// Invite a user to collaborate. New invitations default to `"pending"`
/// with view-only permissions; duplicates surface as 409 through the
/// unique constraint.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateCollaboration>,
) -> AppResult<(StatusCode, Json<Collaboration>)> {
    let (project, _) = require_owner(&state, project_id, auth.user_id).await?;

    let status = input.status.as_deref().unwrap_or(statuses::PENDING);
    validate_status(status).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if is_owner(&project.owner_refs(), input.collaborator_id) {
        return Err(AppError::Core(CoreError::Conflict(
            "The project owner cannot be invited as a collaborator".into(),
        )));
    }

    // The invitee must be a real account.
    UserRepo::find_by_id(&state.pool, input.collaborator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.collaborator_id,
        }))?;

    let permissions = input.permissions.unwrap_or(Permissions::view_only());
    let collaboration = CollaborationRepo::create(
        &state.pool,
        project_id,
        input.collaborator_id,
        status,
        permissions,
    )
    .await?;

    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        collaborator_id = %input.collaborator_id,
        "Collaborator invited"
    );

    Ok((StatusCode::CREATED, Json(collaboration)))
}

/// PUT /api/v1/projects/{id}/collaborations/{collab_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, collab_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCollaboration>,
) -> AppResult<Json<Collaboration>> {
    require_owner(&state, project_id, auth.user_id).await?;

    if let Some(status) = &input.status {
        validate_status(status).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let collaboration = CollaborationRepo::update(&state.pool, collab_id, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id: collab_id,
        }))?;

    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        collaboration_id = %collab_id,
        status = %collaboration.status,
        "Collaboration updated"
    );

    Ok(Json(collaboration))
}

/// DELETE /api/v1/projects/{id}/collaborations/{collab_id}
///
/// The owner can remove any collaboration; a collaborator can remove their
/// own (leave the project).
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, collab_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let (_, access) = require_view(&state, project_id, auth.user_id).await?;

    let collaboration = CollaborationRepo::find_by_id(&state.pool, collab_id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id: collab_id,
        }))?;

    if !access.is_owner && collaboration.collaborator_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner or the collaborator can remove a collaboration".into(),
        )));
    }

    CollaborationRepo::delete(&state.pool, collab_id, project_id).await?;
    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        collaboration_id = %collab_id,
        "Collaboration removed"
    );

    Ok(StatusCode::NO_CONTENT)
}
