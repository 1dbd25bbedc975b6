//! Handlers for project proposals.
//!
//! Reads always return the normalized content shapes, never the raw JSONB
//! columns, so API consumers are insulated from legacy row formats.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use validator::Validate;

use bobbi_db::models::proposal::{CreateProposal, ProposalWithContent, UpdateProposal};
use bobbi_db::repositories::ProposalRepo;

use crate::access::{require_edit, require_view};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/proposals
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProposalWithContent>>> {
    require_view(&state, project_id, auth.user_id).await?;

    let proposals = ProposalRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(proposals.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/projects/{id}/proposals
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProposal>,
) -> AppResult<(StatusCode, Json<ProposalWithContent>)> {
    require_edit(&state, project_id, auth.user_id).await?;
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let proposal = ProposalRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project_id,
        proposal_id = %proposal.id,
        "Proposal created"
    );
    Ok((StatusCode::CREATED, Json(proposal.into())))
}

/// GET /api/v1/projects/{id}/proposals/{proposal_id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, proposal_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProposalWithContent>> {
    require_view(&state, project_id, auth.user_id).await?;

    let proposal = ProposalRepo::find_by_id(&state.pool, proposal_id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id: proposal_id,
        }))?;
    Ok(Json(proposal.into()))
}

/// PUT /api/v1/projects/{id}/proposals/{proposal_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, proposal_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProposal>,
) -> AppResult<Json<ProposalWithContent>> {
    require_edit(&state, project_id, auth.user_id).await?;

    let proposal = ProposalRepo::update(&state.pool, proposal_id, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id: proposal_id,
        }))?;
    Ok(Json(proposal.into()))
}

/// DELETE /api/v1/projects/{id}/proposals/{proposal_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, proposal_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    require_edit(&state, project_id, auth.user_id).await?;

    let deleted = ProposalRepo::delete(&state.pool, proposal_id, project_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id: proposal_id,
        }))
    }
}
