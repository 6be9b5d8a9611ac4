//! Route definitions for the admin moderation listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::moderation;
use crate::state::AppState;

/// Routes mounted at `/moderation`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unapproved", get(moderation::unapproved))
        .route("/denied", get(moderation::denied))
}
