//! Repository for the `proposals` table.
//!
//! Content columns are stored exactly as supplied (structured JSON from new
//! writes, JSON-encoded strings on legacy rows). Normalization happens on
//! the read side, in `bobbi_core::proposal`, after fetch.

use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::proposal::{CreateProposal, Proposal, UpdateProposal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, scope, status, deliverables, pricing, \
                       payment_schedule, signature, created_at, updated_at";

/// Provides CRUD operations for proposals.
pub struct ProposalRepo;

impl ProposalRepo {
    /// Insert a new proposal, returning the created row.
    ///
    /// Omitted content columns default to JSON `null`, which normalizes to
    /// each field's empty default on read.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProposal,
    ) -> Result<Proposal, sqlx::Error> {
        let query = format!(
            "INSERT INTO proposals
                (project_id, title, scope, status, deliverables, pricing, payment_schedule, signature)
             VALUES ($1, $2, $3, COALESCE($4, 'draft'),
                     COALESCE($5, 'null'::jsonb), COALESCE($6, 'null'::jsonb),
                     COALESCE($7, 'null'::jsonb), COALESCE($8, 'null'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proposal>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.scope)
            .bind(&input.status)
            .bind(&input.deliverables)
            .bind(&input.pricing)
            .bind(&input.payment_schedule)
            .bind(&input.signature)
            .fetch_one(pool)
            .await
    }

    /// Find a proposal by ID, scoped to a project.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Proposal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proposals WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Proposal>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's proposals, most recently created first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Proposal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM proposals WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Proposal>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a proposal. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches the ID and project.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
        input: &UpdateProposal,
    ) -> Result<Option<Proposal>, sqlx::Error> {
        let query = format!(
            "UPDATE proposals SET
                title = COALESCE($3, title),
                scope = COALESCE($4, scope),
                status = COALESCE($5, status),
                deliverables = COALESCE($6, deliverables),
                pricing = COALESCE($7, pricing),
                payment_schedule = COALESCE($8, payment_schedule),
                signature = COALESCE($9, signature),
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proposal>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.scope)
            .bind(&input.status)
            .bind(&input.deliverables)
            .bind(&input.pricing)
            .bind(&input.payment_schedule)
            .bind(&input.signature)
            .fetch_optional(pool)
            .await
    }

    /// Delete a proposal. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proposals WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
