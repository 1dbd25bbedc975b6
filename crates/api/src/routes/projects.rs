//! Route definitions for the `/projects` resource and its project-scoped
//! subresources (collaborations, proposals, tasks, files).

use axum::routing::get;
use axum::Router;

use crate::handlers::{collaborations, files, projects, proposals, tasks};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                     -> list
/// POST   /                                     -> create
/// GET    /{id}                                 -> get_by_id
/// PUT    /{id}                                 -> update
/// DELETE /{id}                                 -> delete
/// GET    /{id}/access                          -> get_access
/// GET    /{id}/collaborations                  -> collaborations::list
/// POST   /{id}/collaborations                  -> collaborations::create
/// PUT    /{id}/collaborations/{collab_id}      -> collaborations::update
/// DELETE /{id}/collaborations/{collab_id}      -> collaborations::delete
/// GET    /{id}/proposals                       -> proposals::list
/// POST   /{id}/proposals                       -> proposals::create
/// GET    /{id}/proposals/{proposal_id}         -> proposals::get_by_id
/// PUT    /{id}/proposals/{proposal_id}         -> proposals::update
/// DELETE /{id}/proposals/{proposal_id}         -> proposals::delete
/// GET    /{id}/tasks                           -> tasks::list
/// POST   /{id}/tasks                           -> tasks::create
/// GET    /{id}/tasks/{task_id}                 -> tasks::get_by_id
/// PUT    /{id}/tasks/{task_id}                 -> tasks::update
/// DELETE /{id}/tasks/{task_id}                 -> tasks::delete
/// GET    /{id}/files                           -> files::list
/// POST   /{id}/files                           -> files::create
/// GET    /{id}/files/{file_id}                 -> files::get_by_id
/// PUT    /{id}/files/{file_id}                 -> files::update
/// DELETE /{id}/files/{file_id}                 -> files::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}/access", get(projects::get_access))
        .route(
            "/{id}/collaborations",
            get(collaborations::list).post(collaborations::create),
        )
        .route(
            "/{id}/collaborations/{collab_id}",
            axum::routing::put(collaborations::update).delete(collaborations::delete),
        )
        .route(
            "/{id}/proposals",
            get(proposals::list).post(proposals::create),
        )
        .route(
            "/{id}/proposals/{proposal_id}",
            get(proposals::get_by_id)
                .put(proposals::update)
                .delete(proposals::delete),
        )
        .route("/{id}/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/{id}/tasks/{task_id}",
            get(tasks::get_by_id)
                .put(tasks::update)
                .delete(tasks::delete),
        )
        .route("/{id}/files", get(files::list).post(files::create))
        .route(
            "/{id}/files/{file_id}",
            get(files::get_by_id)
                .put(files::update)
                .delete(files::delete),
        )
}
