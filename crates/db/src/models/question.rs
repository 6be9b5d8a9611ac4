//! Question registry entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use projboard_core::types::{DbId, Timestamp};

/// A question row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub text: String,
    pub active: bool,
    pub created_at: Timestamp,
}

impl From<Question> for projboard_core::questions::Question {
    fn from(q: Question) -> Self {
        projboard_core::questions::Question {
            id: q.id,
            text: q.text,
            active: q.active,
            created_at: q.created_at,
        }
    }
}

/// DTO for registering a new question (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub text: String,
    /// Defaults to active.
    pub active: Option<bool>,
}

/// DTO for amending a question's text or active flag.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuestion {
    pub text: Option<String>,
    pub active: Option<bool>,
}
