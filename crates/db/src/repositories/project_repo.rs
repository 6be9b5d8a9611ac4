//! Repository for the `projects` table.
//!
//! Saves are single statements: the caller validates and merges the answer
//! map in process, then the whole row (including the JSONB map) commits or
//! nothing does. Uniqueness pre-checks here are fast-fail only; the `uq_*`
//! constraints are the authoritative guard under concurrent creation.

use sqlx::types::Json;
use sqlx::PgPool;

use projboard_core::moderation::Approval;
use projboard_core::questions::AnswerMap;
use projboard_core::search::SearchFilters;
use projboard_core::slug::{slugify, suffixed};
use projboard_core::types::{DbId, ProjectState};

use crate::models::project::{Project, ProjectColumns};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, user_id, company_name, company_address, company_site, \
     github_site, application_site, mission_statement, contact_name, contact_position, \
     contact_email, contact_number, contact_hours, nonprofit, five_01c3, state, approved, \
     photo, questions, created_at, updated_at";

/// Provides CRUD, search, and moderation operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `approved` starts NULL (pending) and `state` defaults to unfinished.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        columns: &ProjectColumns,
        slug: &str,
        questions: &AnswerMap,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, slug, user_id, company_name, company_address, \
                 company_site, github_site, application_site, mission_statement, contact_name, \
                 contact_position, contact_email, contact_number, contact_hours, nonprofit, \
                 five_01c3, photo, questions)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&columns.title)
            .bind(slug)
            .bind(user_id)
            .bind(&columns.company_name)
            .bind(&columns.company_address)
            .bind(&columns.company_site)
            .bind(&columns.github_site)
            .bind(&columns.application_site)
            .bind(&columns.mission_statement)
            .bind(&columns.contact_name)
            .bind(&columns.contact_position)
            .bind(&columns.contact_email)
            .bind(&columns.contact_number)
            .bind(&columns.contact_hours)
            .bind(columns.nonprofit)
            .bind(columns.five_01c3)
            .bind(&columns.photo)
            .bind(Json(questions))
            .fetch_one(pool)
            .await
    }

    /// Write the fully-resolved row back. Returns `None` if no row matches.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        columns: &ProjectColumns,
        state: ProjectState,
        user_id: DbId,
        slug: &str,
        questions: &AnswerMap,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2, slug = $3, user_id = $4, company_name = $5, company_address = $6,
                company_site = $7, github_site = $8, application_site = $9,
                mission_statement = $10, contact_name = $11, contact_position = $12,
                contact_email = $13, contact_number = $14, contact_hours = $15,
                nonprofit = $16, five_01c3 = $17, photo = $18, state = $19, questions = $20,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&columns.title)
            .bind(slug)
            .bind(user_id)
            .bind(&columns.company_name)
            .bind(&columns.company_address)
            .bind(&columns.company_site)
            .bind(&columns.github_site)
            .bind(&columns.application_site)
            .bind(&columns.mission_statement)
            .bind(&columns.contact_name)
            .bind(&columns.contact_position)
            .bind(&columns.contact_email)
            .bind(&columns.contact_number)
            .bind(&columns.contact_hours)
            .bind(columns.nonprofit)
            .bind(columns.five_01c3)
            .bind(&columns.photo)
            .bind(state)
            .bind(Json(questions))
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Look up by slug first, falling back to numeric ID for keys that
    /// parse as one.
    pub async fn find_by_slug_or_id(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        if let Some(project) = Self::find_by_slug(pool, key).await? {
            return Ok(Some(project));
        }
        match key.parse::<DbId>() {
            Ok(id) => Self::find_by_id(pool, id).await,
            Err(_) => Ok(None),
        }
    }

    /// Execute a filtered search.
    ///
    /// Absent filters add no clause at all (`NOT $flag` short-circuits the
    /// predicate to TRUE). The title/company pair is a single OR group ANDed
    /// with everything else. Public mode additionally restricts to
    /// `approved = TRUE`; admin mode searches the full table.
    pub async fn search(
        pool: &PgPool,
        filters: &SearchFilters,
        admin: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE (NOT $1 OR nonprofit = TRUE)
               AND (NOT $2 OR five_01c3 = TRUE)
               AND (NOT $3 OR nonprofit = FALSE)
               AND ($4::TEXT IS NULL
                    OR title ILIKE '%' || $4 || '%'
                    OR company_name ILIKE '%' || $4 || '%')
               AND (NOT $5 OR state = $6)
               AND (NOT $7 OR approved = TRUE)
             ORDER BY created_at DESC
             LIMIT $8 OFFSET $9"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filters.nonprofit)
            .bind(filters.five_01c3)
            .bind(filters.forprofit)
            .bind(filters.search_string.as_deref())
            .bind(filters.finished)
            .bind(ProjectState::Finished)
            .bind(!admin)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Set the moderation tri-state. Returns `None` if no row matches.
    pub async fn set_approval(
        pool: &PgPool,
        id: DbId,
        approval: Approval,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET approved = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(approval.to_column())
            .fetch_optional(pool)
            .await
    }

    /// List projects still awaiting moderation (approved IS NULL).
    pub async fn unapproved(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE approved IS NULL ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List denied projects (approved = FALSE).
    pub async fn denied(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE approved = FALSE ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Delete a project by ID. Favorites cascade at the constraint level.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Uniqueness pre-checks (fast-fail; the uq_* constraints decide races)
    // -----------------------------------------------------------------------

    pub async fn title_taken(
        pool: &PgPool,
        title: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        Self::value_taken(pool, "title", title, exclude).await
    }

    pub async fn github_site_taken(
        pool: &PgPool,
        value: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        Self::value_taken(pool, "github_site", value, exclude).await
    }

    pub async fn application_site_taken(
        pool: &PgPool,
        value: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        Self::value_taken(pool, "application_site", value, exclude).await
    }

    async fn value_taken(
        pool: &PgPool,
        column: &str,
        value: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM projects
             WHERE {column} = $1 AND ($2::BIGINT IS NULL OR id <> $2))"
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(value)
            .bind(exclude)
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Slug derivation
    // -----------------------------------------------------------------------

    /// Derive a unique slug for a title, suffixing `-2`, `-3`, ... past
    /// collisions. `exclude` keeps a record's own slug out of the check on
    /// title change.
    pub async fn unique_slug(
        pool: &PgPool,
        title: &str,
        exclude: Option<DbId>,
    ) -> Result<String, sqlx::Error> {
        let base = slugify(title);
        let base = if base.is_empty() { "project".to_string() } else { base };
        let mut attempt = 1;
        loop {
            let candidate = suffixed(&base, attempt);
            if !Self::value_taken(pool, "slug", &candidate, exclude).await? {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }
}
