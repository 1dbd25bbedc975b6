//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod calendar_event;
pub mod client;
pub mod collaboration;
pub mod file;
pub mod project;
pub mod proposal;
pub mod session;
pub mod task;
pub mod user;
