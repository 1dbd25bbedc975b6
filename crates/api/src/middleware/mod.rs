//! Request extractors applied before handler logic runs.

pub mod auth;
