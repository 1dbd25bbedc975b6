//! Proposal entity model and DTOs.
//!
//! The four content columns are JSONB and may hold either structured values
//! or JSON-encoded strings on legacy rows. Rows are stored as-is; the read
//! side normalizes through [`Proposal::content`] after fetch, so consumers
//! only ever see the canonical shapes.

use bobbi_core::proposal::ProposalContent;
use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A proposal row from the `proposals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proposal {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub scope: Option<String>,
    pub status: String,
    pub deliverables: serde_json::Value,
    pub pricing: serde_json::Value,
    pub payment_schedule: serde_json::Value,
    pub signature: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Proposal {
    /// Normalize the raw content columns into their canonical shapes.
    pub fn content(&self) -> ProposalContent {
        ProposalContent::from_raw(
            &self.deliverables,
            &self.pricing,
            &self.payment_schedule,
            &self.signature,
        )
    }
}

/// A proposal with its content already normalized, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalWithContent {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub scope: Option<String>,
    pub status: String,
    pub content: ProposalContent,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Proposal> for ProposalWithContent {
    fn from(row: Proposal) -> Self {
        let content = row.content();
        Self {
            id: row.id,
            project_id: row.project_id,
            title: row.title,
            scope: row.scope,
            status: row.status,
            content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new proposal.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProposal {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub scope: Option<String>,
    /// Defaults to `"draft"` if omitted.
    pub status: Option<String>,
    pub deliverables: Option<serde_json::Value>,
    pub pricing: Option<serde_json::Value>,
    pub payment_schedule: Option<serde_json::Value>,
    pub signature: Option<serde_json::Value>,
}

/// DTO for updating an existing proposal. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProposal {
    pub title: Option<String>,
    pub scope: Option<String>,
    pub status: Option<String>,
    pub deliverables: Option<serde_json::Value>,
    pub pricing: Option<serde_json::Value>,
    pub payment_schedule: Option<serde_json::Value>,
    pub signature: Option<serde_json::Value>,
}
