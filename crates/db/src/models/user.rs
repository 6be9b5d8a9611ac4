//! Minimal user entity.
//!
//! Identity and permissions are supplied per-request by the external
//! identity collaborator; this row exists to anchor ownership and
//! favorite foreign keys.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use projboard_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a user record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
}
