//! Handlers for the `/questions` registry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use projboard_core::error::CoreError;
use projboard_core::types::DbId;
use projboard_db::models::question::{CreateQuestion, Question, UpdateQuestion};
use projboard_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::tier::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/questions — all questions, historical ones included.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    Ok(Json(QuestionRepo::list(&state.pool).await?))
}

/// GET /api/v1/questions/current — the currently-active set.
pub async fn list_current(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    Ok(Json(QuestionRepo::list_active(&state.pool).await?))
}

/// POST /api/v1/questions
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
    Json(input): Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    if input.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be blank".to_string()));
    }
    let question = QuestionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// PUT /api/v1/questions/{id}
///
/// Deactivating a question removes it from the current set; records that
/// already answered it keep their stored keys.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<Json<Question>> {
    let question = QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Question", id)))?;
    Ok(Json(question))
}
