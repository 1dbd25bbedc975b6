//! Table repositories.
//!
//! Each repository is a unit struct with static async functions taking a
//! `&PgPool`. All functions return `Result<_, sqlx::Error>`: the `Err` arm
//! means the lookup itself failed, `Ok(None)` means the lookup succeeded and
//! found nothing.

pub mod calendar_event_repo;
pub mod client_repo;
pub mod collaboration_repo;
pub mod file_repo;
pub mod project_repo;
pub mod proposal_repo;
pub mod session_repo;
pub mod task_repo;
pub mod user_repo;

pub use calendar_event_repo::CalendarEventRepo;
pub use client_repo::ClientRepo;
pub use collaboration_repo::CollaborationRepo;
pub use file_repo::FileRepo;
pub use project_repo::ProjectRepo;
pub use proposal_repo::ProposalRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
