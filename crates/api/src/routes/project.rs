//! Route definitions for the `/projects` resource.
//!
//! Moderation actions and the favorite relation are mounted here too since
//! they are project-scoped.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{favorite, moderation, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::search).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_key)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/admin", put(project::admin_update))
        .route("/{id}/approve", post(moderation::approve))
        .route("/{id}/deny", post(moderation::deny))
        .route("/{id}/favorite", post(favorite::add).delete(favorite::remove))
        .route("/{id}/favorited-by", get(favorite::favorited_by))
}
