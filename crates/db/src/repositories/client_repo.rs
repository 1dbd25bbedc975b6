//! Repository for the `clients` table.
//!
//! All queries are scoped by the owning user: a client row is only ever
//! visible to the user who created it.

use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, email, company, phone, notes, created_at, updated_at";

/// Provides CRUD operations for a freelancer's client records.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (user_id, name, email, company, phone, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.phone)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a client by ID, scoped to its owning user.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's clients, alphabetically by name.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE user_id = $1 ORDER BY name");
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches the ID and owning user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                company = COALESCE($5, company),
                phone = COALESCE($6, phone),
                notes = COALESCE($7, notes),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.phone)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
