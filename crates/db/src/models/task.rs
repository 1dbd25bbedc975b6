//! Task entity model and DTOs.

use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"todo"` if omitted.
    pub status: Option<String>,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<Timestamp>,
}
