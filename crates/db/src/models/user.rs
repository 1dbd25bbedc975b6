//! User account model and DTOs.

use bobbi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
///
/// The password hash never leaves the server: it is skipped on
/// serialization so a `User` can be embedded in a response body directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Insert payload with the password already hashed.
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
}

/// DTO for updating a user's profile. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(email)]
    pub email: Option<String>,
    pub display_name: Option<String>,
}
