//! Repository for the `favorites` join table.

use sqlx::PgPool;

use projboard_core::types::DbId;

use crate::models::user::User;
use crate::models::project::Project;

/// Provides operations on the user <-> project favorite relation.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Add a favorite. Idempotent: returns `false` if it already existed.
    pub async fn add(pool: &PgPool, user_id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO favorites (user_id, project_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_favorites_user_project DO NOTHING",
        )
        .bind(user_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a favorite. Returns `true` if a row was removed.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND project_id = $2")
            .bind(user_id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the users who favorited a project, oldest favorite first.
    pub async fn users_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.name, u.created_at
             FROM users u
             JOIN favorites f ON f.user_id = u.id
             WHERE f.project_id = $1
             ORDER BY f.created_at ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// List the projects a user has favorited, newest favorite first.
    pub async fn projects_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            "SELECT p.id, p.title, p.slug, p.user_id, p.company_name, p.company_address,
                    p.company_site, p.github_site, p.application_site, p.mission_statement,
                    p.contact_name, p.contact_position, p.contact_email, p.contact_number,
                    p.contact_hours, p.nonprofit, p.five_01c3, p.state, p.approved, p.photo,
                    p.questions, p.created_at, p.updated_at
             FROM projects p
             JOIN favorites f ON f.project_id = p.id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
