//! Client (customer) entity model and DTOs.
//!
//! Clients are the freelancer's own customer records and are always owned by
//! a single user; they are not user accounts.

use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClient {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}
