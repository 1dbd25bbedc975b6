//! Health check routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// Routes mounted at the server root (not under `/api/v1`).
///
/// ```text
/// GET /health     -> liveness, no dependencies touched
/// GET /health/db  -> verifies database connectivity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/db", get(health_db))
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /health/db
async fn health_db(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    bobbi_db::health_check(&state.pool).await?;
    Ok(Json(json!({ "status": "ok", "database": "ok" })))
}
