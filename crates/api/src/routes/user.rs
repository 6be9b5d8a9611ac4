//! Route definitions for user-scoped listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/favorites", get(favorite::user_favorites))
}
