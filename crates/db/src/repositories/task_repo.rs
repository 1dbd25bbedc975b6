//! Repository for the `tasks` table.

use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, description, status, due_date, created_at, updated_at";

/// Provides CRUD operations for project tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, description, status, due_date)
             VALUES ($1, $2, $3, COALESCE($4, 'todo'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by ID, scoped to a project.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's tasks: soonest due date first, undated tasks last.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1
             ORDER BY due_date NULLS LAST, created_at"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches the ID and project.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                due_date = COALESCE($6, due_date),
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
