//! Repository for the `projects` table.
//!
//! `find_by_id` is deliberately unscoped: visibility is decided by access
//! resolution after fetch, not by the query, so a failed fetch and a missing
//! row stay distinguishable from a denial.

use bobbi_core::collaboration::statuses;
use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, user_id, owner_id, provider_id, client_id, \
                       created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `user_id`, returning the created row.
    ///
    /// Only the `user_id` owner column is populated for new rows; the legacy
    /// alternates stay NULL.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, description, status, client_id)
             VALUES ($1, $2, $3, COALESCE($4, 'active'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.client_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID, regardless of requester.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every project a user can see: rows where any owner column
    /// matches, plus rows shared with the user through an active
    /// collaboration. Most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let active = statuses::ACTIVE;
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             WHERE p.user_id = $1 OR p.owner_id = $1 OR p.provider_id = $1
                OR EXISTS (
                    SELECT 1 FROM collaborations c
                    WHERE c.project_id = p.id
                      AND c.collaborator_id = $1
                      AND c.status = '{active}'
                )
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                client_id = COALESCE($5, client_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.client_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was
    /// removed. Dependent rows (collaborations, proposals, tasks, files)
    /// cascade at the schema level.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
