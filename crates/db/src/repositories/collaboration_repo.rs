//! Repository for the `collaborations` table.
//!
//! `find_active` is the collaboration-lookup capability access resolution
//! depends on: `Ok(Some(_))` is an active grant, `Ok(None)` means no active
//! collaboration exists, and `Err` means the lookup itself failed. The three
//! outcomes must never collapse into each other.

use bobbi_core::collaboration::{statuses, Permissions};
use bobbi_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::collaboration::{Collaboration, UpdateCollaboration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, collaborator_id, status, permissions, created_at, updated_at";

/// Provides CRUD operations for project collaborations.
pub struct CollaborationRepo;

impl CollaborationRepo {
    /// Insert a new collaboration, returning the created row.
    ///
    /// The unique constraint on (project, collaborator) surfaces duplicate
    /// invitations as a conflict.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        collaborator_id: DbId,
        status: &str,
        permissions: Permissions,
    ) -> Result<Collaboration, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaborations (project_id, collaborator_id, status, permissions)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(project_id)
            .bind(collaborator_id)
            .bind(status)
            .bind(Json(permissions))
            .fetch_one(pool)
            .await
    }

    /// Find a collaboration by its internal ID, scoped to a project.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM collaborations WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the requester's **active** collaboration on a project, if any.
    pub async fn find_active(
        pool: &PgPool,
        project_id: DbId,
        collaborator_id: DbId,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let active = statuses::ACTIVE;
        let query = format!(
            "SELECT {COLUMNS} FROM collaborations
             WHERE project_id = $1 AND collaborator_id = $2 AND status = '{active}'"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(project_id)
            .bind(collaborator_id)
            .fetch_optional(pool)
            .await
    }

    /// List all collaborations on a project, oldest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Collaboration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM collaborations WHERE project_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a collaboration's status and/or permissions.
    ///
    /// Returns `None` if no row matches the ID and project.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
        input: &UpdateCollaboration,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let query = format!(
            "UPDATE collaborations SET
                status = COALESCE($3, status),
                permissions = COALESCE($4, permissions),
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.status)
            .bind(input.permissions.map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a collaboration. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collaborations WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
