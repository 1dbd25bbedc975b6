//! Project access enforcement for handlers.
//!
//! Bridges the pure resolver in `bobbi_core::access` to the HTTP layer:
//! fetches the project and the caller's active collaboration grant, resolves
//! access, and maps the outcome to responses. Repository errors propagate
//! as-is so a failed lookup is never downgraded to a denial, and a project
//! the caller cannot view produces the same 404 as a project that does not
//! exist -- unauthorized callers cannot probe for existence.

use bobbi_core::access::{resolve_access, ProjectAccess};
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use bobbi_db::models::project::Project;
use bobbi_db::repositories::{CollaborationRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fetch a project and resolve the caller's access to it, requiring at
/// least view permission.
pub async fn require_view(
    state: &AppState,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<(Project, ProjectAccess)> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let grant = CollaborationRepo::find_active(&state.pool, project_id, user_id)
        .await?
        .and_then(|row| row.grant());

    let access = resolve_access(&project.owner_refs(), user_id, grant.as_ref());
    if !access.can_view() {
        // Same response as a missing project.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    Ok((project, access))
}

/// Like [`require_view`], additionally requiring edit permission.
pub async fn require_edit(
    state: &AppState,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<(Project, ProjectAccess)> {
    let (project, access) = require_view(state, project_id, user_id).await?;
    if !access.can_edit() {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have edit permission on this project".into(),
        )));
    }
    Ok((project, access))
}

/// Like [`require_view`], additionally requiring delete permission.
pub async fn require_delete(
    state: &AppState,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<(Project, ProjectAccess)> {
    let (project, access) = require_view(state, project_id, user_id).await?;
    if !access.can_delete() {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have delete permission on this project".into(),
        )));
    }
    Ok((project, access))
}

/// Like [`require_view`], additionally requiring ownership. Used for
/// collaboration management, which collaborators may see but never change.
pub async fn require_owner(
    state: &AppState,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<(Project, ProjectAccess)> {
    let (project, access) = require_view(state, project_id, user_id).await?;
    if !access.is_owner {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner can manage collaborations".into(),
        )));
    }
    Ok((project, access))
}
