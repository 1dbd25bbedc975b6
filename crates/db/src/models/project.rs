//! Project entity model and DTOs.

use bobbi_core::access::OwnerRefs;
use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
///
/// Three owner-reference columns coexist for historical reasons; at most one
/// is populated per row. New rows always populate `user_id`. Access checks
/// must go through [`Project::owner_refs`] rather than reading any single
/// column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub user_id: Option<DbId>,
    pub owner_id: Option<DbId>,
    pub provider_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The owner-reference columns of this row, for access resolution.
    pub fn owner_refs(&self) -> OwnerRefs {
        OwnerRefs {
            user_id: self.user_id,
            owner_id: self.owner_id,
            provider_id: self.provider_id,
        }
    }
}

/// DTO for creating a new project. The creating user becomes the owner.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `"active"` if omitted.
    pub status: Option<String>,
    pub client_id: Option<DbId>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub client_id: Option<DbId>,
}
