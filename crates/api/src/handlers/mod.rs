//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod calendar;
pub mod clients;
pub mod collaborations;
pub mod files;
pub mod projects;
pub mod proposals;
pub mod tasks;
pub mod users;
