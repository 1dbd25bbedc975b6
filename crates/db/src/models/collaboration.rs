//! Collaboration entity model and DTOs.

use bobbi_core::access::CollaborationGrant;
use bobbi_core::collaboration::Permissions;
use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A collaboration row from the `collaborations` table, linking a project to
/// a collaborator identity with a status and a permissions record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collaboration {
    pub id: DbId,
    pub project_id: DbId,
    pub collaborator_id: DbId,
    pub status: String,
    pub permissions: Json<Permissions>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Collaboration {
    /// The effective grant this row represents, or `None` when the status
    /// does not grant access.
    pub fn grant(&self) -> Option<CollaborationGrant> {
        CollaborationGrant::from_row(&self.status, self.collaborator_id, self.permissions.0)
    }
}

/// DTO for inviting a collaborator to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollaboration {
    pub collaborator_id: DbId,
    /// Defaults to `"pending"` if omitted.
    pub status: Option<String>,
    /// Defaults to view-only if omitted.
    pub permissions: Option<Permissions>,
}

/// DTO for updating a collaboration's status or permissions.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCollaboration {
    pub status: Option<String>,
    pub permissions: Option<Permissions>,
}
