//! Route registration.

pub mod auth;
pub mod calendar;
pub mod clients;
pub mod health;
pub mod projects;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/me", users::router())
        .nest("/clients", clients::router())
        .nest("/projects", projects::router())
        .nest("/calendar-events", calendar::router())
}
