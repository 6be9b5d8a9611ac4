//! Favorite join entity (user <-> project).

use serde::Serialize;
use sqlx::FromRow;

use projboard_core::types::{DbId, Timestamp};

/// A favorite row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub created_at: Timestamp,
}
