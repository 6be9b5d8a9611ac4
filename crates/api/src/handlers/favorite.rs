//! Handlers for the favorite relation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use projboard_core::error::CoreError;
use projboard_core::types::DbId;
use projboard_db::models::project::Project;
use projboard_db::models::user::User;
use projboard_db::repositories::{FavoriteRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::tier::Actor;
use crate::state::AppState;

async fn ensure_project_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(())
}

/// POST /api/v1/projects/{id}/favorite
///
/// Idempotent: favoriting twice returns 200 instead of 201.
pub async fn add(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_project_exists(&state, id).await?;
    let created = FavoriteRepo::add(&state.pool, actor.user_id, id).await?;
    Ok(if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    })
}

/// DELETE /api/v1/projects/{id}/favorite
pub async fn remove(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = FavoriteRepo::remove(&state.pool, actor.user_id, id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Favorite", id)))
    }
}

/// GET /api/v1/projects/{id}/favorited-by
pub async fn favorited_by(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<User>>> {
    ensure_project_exists(&state, id).await?;
    Ok(Json(FavoriteRepo::users_for_project(&state.pool, id).await?))
}

/// GET /api/v1/users/{id}/favorites
///
/// A user may list their own favorites; admins may list anyone's.
pub async fn user_favorites(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Project>>> {
    if !actor.is_admin() && actor.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "May only list your own favorites".to_string(),
        )));
    }
    Ok(Json(FavoriteRepo::projects_for_user(&state.pool, id).await?))
}
