//! Repository for the `sessions` table.

use bobbi_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, refresh_token_hash, expires_at, is_revoked, created_at, updated_at";

/// Provides operations for refresh-token sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a live (non-revoked, non-expired) session by refresh-token hash.
    pub async fn find_live_by_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE refresh_token_hash = $1 AND is_revoked = false AND expires_at > NOW()"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a session by refresh-token hash. Returns `true` if a live
    /// session was revoked.
    pub async fn revoke_by_hash(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET is_revoked = true, updated_at = NOW()
             WHERE refresh_token_hash = $1 AND is_revoked = false",
        )
        .bind(token_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke every live session belonging to a user. Returns the number of
    /// sessions revoked.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET is_revoked = true, updated_at = NOW()
             WHERE user_id = $1 AND is_revoked = false",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Remove expired sessions. Returns the number of rows deleted.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
