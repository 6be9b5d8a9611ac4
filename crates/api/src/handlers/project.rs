//! Handlers for the `/projects` resource.
//!
//! Every save runs the same pipeline: resolve the candidate columns,
//! validate, fast-fail uniqueness pre-checks, merge transient answers into
//! the stored map, then persist in a single statement. Tier gating is
//! structural (per-tier DTOs) plus an ownership check on the mutating
//! routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use projboard_core::error::CoreError;
use projboard_core::questions::{merge_answers, AnswerMap, IncomingAnswers};
use projboard_core::search::{clamp_limit, clamp_offset, RawSearchParams, SearchFilters};
use projboard_core::types::DbId;
use projboard_core::validation::validate_project;
use projboard_db::models::project::{
    AdminUpdateProject, CreateProject, OwnerUpdateProject, Project, ProjectColumns,
};
use projboard_db::repositories::{ProjectRepo, QuestionRepo};
use projboard_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::tier::{Actor, MaybeActor, RequireAdmin};
use crate::state::AppState;

/// Run the core validator, converting violations into a 400.
fn validate(columns: &ProjectColumns) -> AppResult<()> {
    let result = validate_project(&columns.fields());
    if !result.is_valid {
        return Err(AppError::Core(CoreError::Validation(result.violations)));
    }
    Ok(())
}

/// Fast-fail uniqueness pre-checks. The `uq_*` constraints remain the
/// authoritative guard; losing the race still surfaces as 409.
async fn check_unique(
    pool: &DbPool,
    columns: &ProjectColumns,
    exclude: Option<DbId>,
) -> AppResult<()> {
    if ProjectRepo::title_taken(pool, &columns.title, exclude).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "title is already taken".to_string(),
        )));
    }
    if let Some(site) = columns.github_site.as_deref().filter(|s| !s.trim().is_empty()) {
        if ProjectRepo::github_site_taken(pool, site, exclude).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "github_site is already taken".to_string(),
            )));
        }
    }
    if let Some(site) = columns
        .application_site
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        if ProjectRepo::application_site_taken(pool, site, exclude).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "application_site is already taken".to_string(),
            )));
        }
    }
    Ok(())
}

/// Merge transient answers into the stored map against a registry snapshot.
async fn merged_answers(
    pool: &DbPool,
    mut stored: AnswerMap,
    incoming: Option<&IncomingAnswers>,
) -> AppResult<AnswerMap> {
    if let Some(incoming) = incoming {
        let snapshot = QuestionRepo::snapshot(pool).await?;
        merge_answers(&mut stored, &snapshot, incoming);
    }
    Ok(stored)
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let columns = input.columns();
    validate(&columns)?;
    check_unique(&state.pool, &columns, None).await?;

    let questions = merged_answers(&state.pool, AnswerMap::new(), input.answers.as_ref()).await?;
    let slug = ProjectRepo::unique_slug(&state.pool, &columns.title, None).await?;

    let project =
        ProjectRepo::create(&state.pool, actor.user_id, &columns, &slug, &questions).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Admin actors search the full table; everyone else gets public mode
/// (approved records only).
pub async fn search(
    State(state): State<AppState>,
    MaybeActor(actor): MaybeActor,
    Query(params): Query<RawSearchParams>,
) -> AppResult<Json<Vec<Project>>> {
    let filters = SearchFilters::from_params(&params);
    let admin = actor.map(|a| a.is_admin()).unwrap_or(false);
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let projects = ProjectRepo::search(&state.pool, &filters, admin, limit, offset).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{key}
///
/// Looks up by slug, falling back to numeric ID.
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_slug_or_id(&state.pool, &key)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            key,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Owner-tier update: the record's owner or an admin. The DTO cannot carry
/// `approved`, `state`, or `user_id`.
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<DbId>,
    Json(input): Json<OwnerUpdateProject>,
) -> AppResult<Json<Project>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    if !actor.is_admin() && actor.user_id != existing.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner or an admin may update this project".to_string(),
        )));
    }

    let columns = input.apply_to(&existing);
    validate(&columns)?;
    check_unique(&state.pool, &columns, Some(id)).await?;

    let questions =
        merged_answers(&state.pool, existing.questions.0.clone(), input.answers.as_ref()).await?;
    let slug = if columns.title != existing.title {
        ProjectRepo::unique_slug(&state.pool, &columns.title, Some(id)).await?
    } else {
        existing.slug.clone()
    };

    let project = ProjectRepo::update(
        &state.pool,
        id,
        &columns,
        existing.state,
        existing.user_id,
        &slug,
        &questions,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}/admin
///
/// Admin-tier update: owner fields plus completion state and owner
/// reassignment.
pub async fn admin_update(
    State(state): State<AppState>,
    RequireAdmin(_actor): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AdminUpdateProject>,
) -> AppResult<Json<Project>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;

    let (columns, state_value, user_id) = input.apply_to(&existing);
    validate(&columns)?;
    check_unique(&state.pool, &columns, Some(id)).await?;

    let questions =
        merged_answers(&state.pool, existing.questions.0.clone(), input.answers.as_ref()).await?;
    let slug = if columns.title != existing.title {
        ProjectRepo::unique_slug(&state.pool, &columns.title, Some(id)).await?
    } else {
        existing.slug.clone()
    };

    let project = ProjectRepo::update(
        &state.pool,
        id,
        &columns,
        state_value,
        user_id,
        &slug,
        &questions,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Owner or admin. Favorites cascade with the row.
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", id)))?;
    if !actor.is_admin() && actor.user_id != existing.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner or an admin may delete this project".to_string(),
        )));
    }

    ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
