//! Bobbi domain core.
//!
//! Pure, synchronous domain logic shared by the persistence and API layers:
//! project access resolution (owner vs. collaborator vs. none), proposal
//! content normalization across legacy persisted shapes, collaboration
//! statuses and permission records, and the domain error taxonomy.
//!
//! Nothing in this crate performs I/O. Every function operates on
//! already-fetched data and returns synchronously, so all of it is callable
//! in isolation from tests.

pub mod access;
pub mod collaboration;
pub mod error;
pub mod proposal;
pub mod types;
