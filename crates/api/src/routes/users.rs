//! Route definitions for the `/me` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET /  -> me
/// PUT /  -> update_me
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(users::me).put(users::update_me))
}
