//! User session model and DTOs.

use bobbi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A user session row from the `sessions` table.
///
/// Only the SHA-256 hash of the refresh token is stored; the plaintext goes
/// to the client once and is never persisted.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
