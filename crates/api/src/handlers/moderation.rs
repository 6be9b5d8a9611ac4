//! Handlers for the moderation gate.
//!
//! `approved` moves only through these endpoints: admins may re-evaluate in
//! either direction at any time, and there are no automatic transitions.

use axum::extract::{Path, State};
use axum::Json;

use projboard_core::error::CoreError;
use projboard_core::moderation::Approval;
use projboard_core::types::DbId;
use projboard_db::models::project::Project;
use projboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::tier::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    set_approval(&state, id, Approval::Approved).await
}

/// POST /api/v1/projects/{id}/deny
pub async fn deny(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    set_approval(&state, id, Approval::Denied).await
}

async fn set_approval(state: &AppState, id: DbId, approval: Approval) -> AppResult<Json<Project>> {
    let project = ProjectRepo::set_approval(&state.pool, id, approval)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    tracing::info!(project_id = id, approval = ?approval, "Moderation decision recorded");
    Ok(Json(project))
}

/// GET /api/v1/moderation/unapproved
pub async fn unapproved(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(ProjectRepo::unapproved(&state.pool).await?))
}

/// GET /api/v1/moderation/denied
pub async fn denied(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(ProjectRepo::denied(&state.pool).await?))
}
