//! Repository for the `questions` registry table.

use sqlx::PgPool;

use projboard_core::types::DbId;

use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, active, created_at";

/// Provides read/write operations for the question registry.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List all questions, historical ones included, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List the currently-active questions, ordered by ID.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE active ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Register a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (text, active)
             VALUES ($1, COALESCE($2, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.text)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Update a question. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                text = COALESCE($2, text),
                active = COALESCE($3, active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the full registry as a core snapshot for the answer merger.
    /// The merger itself picks the active subset when bootstrapping.
    pub async fn snapshot(
        pool: &PgPool,
    ) -> Result<Vec<projboard_core::questions::Question>, sqlx::Error> {
        Ok(Self::list(pool).await?.into_iter().map(Into::into).collect())
    }
}
