//! Domain error taxonomy.
//!
//! `CoreError` is the single error type the API layer maps to HTTP status
//! codes. Repository-level `sqlx::Error` values are kept separate so that a
//! failed lookup is never conflated with a resolved "denied" or "not found"
//! outcome.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity was looked up successfully and does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
