//! Route definitions for the `/questions` registry.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route("/current", get(question::list_current))
        .route("/{id}", put(question::update))
}
