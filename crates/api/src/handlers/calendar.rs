//! Handlers for the `/calendar-events` resource.
//!
//! Events are personal to the authenticated user. The optional project
//! reference is informational only and does not widen visibility.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::error::CoreError;
use bobbi_core::types::DbId;
use validator::Validate;

use bobbi_db::models::calendar_event::{
    CalendarEvent, CreateCalendarEvent, UpdateCalendarEvent,
};
use bobbi_db::repositories::CalendarEventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/calendar-events
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCalendarEvent>,
) -> AppResult<(StatusCode, Json<CalendarEvent>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if let Some(ends_at) = input.ends_at {
        if ends_at < input.starts_at {
            return Err(AppError::Core(CoreError::Validation(
                "ends_at must not be before starts_at".into(),
            )));
        }
    }

    let event = CalendarEventRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(user_id = %auth.user_id, event_id = %event.id, "Calendar event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/calendar-events
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = CalendarEventRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(events))
}

/// GET /api/v1/calendar-events/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CalendarEvent>> {
    let event = CalendarEventRepo::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CalendarEvent",
            id,
        }))?;
    Ok(Json(event))
}

/// PUT /api/v1/calendar-events/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCalendarEvent>,
) -> AppResult<Json<CalendarEvent>> {
    let event = CalendarEventRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CalendarEvent",
            id,
        }))?;
    Ok(Json(event))
}

/// DELETE /api/v1/calendar-events/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CalendarEventRepo::delete(&state.pool, id, auth.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CalendarEvent",
            id,
        }))
    }
}
