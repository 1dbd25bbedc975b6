//! Repository for the `files` table (project file metadata).

use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::file::{CreateFile, ProjectFile, UpdateFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, storage_path, content_type, size_bytes, created_at, updated_at";

/// Provides CRUD operations for project file metadata.
pub struct FileRepo;

impl FileRepo {
    /// Insert a new file record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateFile,
    ) -> Result<ProjectFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO files (project_id, name, storage_path, content_type, size_bytes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.storage_path)
            .bind(&input.content_type)
            .bind(input.size_bytes)
            .fetch_one(pool)
            .await
    }

    /// Find a file record by ID, scoped to a project.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM files WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's files, most recently added first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM files WHERE project_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update file metadata. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches the ID and project.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
        input: &UpdateFile,
    ) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!(
            "UPDATE files SET
                name = COALESCE($3, name),
                content_type = COALESCE($4, content_type),
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.content_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a file record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
