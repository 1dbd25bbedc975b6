//! Repository for the `calendar_events` table.
//!
//! Events are personal: every query is scoped by the owning user. The
//! optional project reference is informational and does not widen
//! visibility.

use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::calendar_event::{CalendarEvent, CreateCalendarEvent, UpdateCalendarEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, title, description, starts_at, ends_at, \
                       created_at, updated_at";

/// Provides CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    /// Insert a new event owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCalendarEvent,
    ) -> Result<CalendarEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_events (user_id, project_id, title, description, starts_at, ends_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(user_id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID, scoped to its owning user.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM calendar_events WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's events in chronological order.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_events WHERE user_id = $1 ORDER BY starts_at"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches the ID and owning user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateCalendarEvent,
    ) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE calendar_events SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                project_id = COALESCE($5, project_id),
                starts_at = COALESCE($6, starts_at),
                ends_at = COALESCE($7, ends_at),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.project_id)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
