//! Calendar event model and DTOs.

use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A calendar event row from the `calendar_events` table.
///
/// Events belong to a user and may optionally reference one of their
/// projects (e.g. a kickoff call or a delivery deadline).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new calendar event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCalendarEvent {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
}

/// DTO for updating an existing calendar event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCalendarEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}
