//! Project file metadata model and DTOs.
//!
//! Only file metadata is stored here; the blobs themselves live in external
//! object storage addressed by `storage_path`.

use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A file metadata row from the `files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFile {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub storage_path: String,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an uploaded file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFile {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "storage_path must not be empty"))]
    pub storage_path: String,
    pub content_type: Option<String>,
    pub size_bytes: Option<i64>,
}

/// DTO for updating file metadata. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFile {
    pub name: Option<String>,
    pub content_type: Option<String>,
}
