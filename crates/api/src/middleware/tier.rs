//! Permission tier extractors.
//!
//! The external identity collaborator fronts this service and injects the
//! acting user with each request via `x-user-id` and `x-user-tier` headers.
//! Extractors wrap [`Actor`] and reject requests whose tier does not meet
//! the minimum requirement, enforcing authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use projboard_core::error::CoreError;
use projboard_core::tiers::{is_valid_tier, TIER_ADMIN, TIER_PUBLIC};
use projboard_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// The acting user, as asserted by the identity collaborator.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: DbId,
    pub tier: String,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.tier == TIER_ADMIN
    }
}

fn actor_from_parts(parts: &Parts) -> Result<Option<Actor>, AppError> {
    let Some(raw_id) = parts.headers.get("x-user-id") else {
        return Ok(None);
    };
    let user_id: DbId = raw_id
        .to_str()
        .ok()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid x-user-id header".to_string(),
            ))
        })?;

    let tier = parts
        .headers
        .get("x-user-tier")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(TIER_PUBLIC)
        .to_string();
    if !is_valid_tier(&tier) {
        return Err(AppError::Core(CoreError::Unauthorized(format!(
            "Unknown tier '{tier}'"
        ))));
    }

    Ok(Some(Actor { user_id, tier }))
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        actor_from_parts(parts)?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing x-user-id header".to_string(),
            ))
        })
    }
}

/// An actor when identity headers are present, `None` otherwise.
///
/// Used by routes that serve anonymous callers but widen for known tiers
/// (e.g. project search runs in admin mode for admins).
pub struct MaybeActor(pub Option<Actor>);

impl FromRequestParts<AppState> for MaybeActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeActor(actor_from_parts(parts)?))
    }
}

/// Requires the `admin` tier. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(actor): RequireAdmin) -> AppResult<Json<()>> {
///     // actor is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Actor);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = Actor::from_request_parts(parts, state).await?;
        if !actor.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin tier required".to_string(),
            )));
        }
        Ok(RequireAdmin(actor))
    }
}
