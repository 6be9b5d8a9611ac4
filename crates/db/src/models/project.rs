//! Project entity model and per-tier DTOs.
//!
//! Tier gating is structural: each update DTO lists only the fields its tier
//! may set, so a request carrying a forbidden field simply has nowhere to
//! put it. `approved` appears in no DTO at all; it moves only through the
//! moderation endpoints.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use projboard_core::moderation::Approval;
use projboard_core::questions::{AnswerMap, IncomingAnswers};
use projboard_core::types::{DbId, ProjectState, Timestamp};
use projboard_core::validation::ProjectFields;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub user_id: DbId,
    pub company_name: String,
    pub company_address: String,
    pub company_site: String,
    pub github_site: Option<String>,
    pub application_site: Option<String>,
    pub mission_statement: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_email: String,
    pub contact_number: String,
    pub contact_hours: String,
    pub nonprofit: bool,
    pub five_01c3: bool,
    pub state: ProjectState,
    pub approved: Option<bool>,
    pub photo: Option<String>,
    pub questions: Json<AnswerMap>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Decode the nullable `approved` column into the tri-state.
    pub fn approval(&self) -> Approval {
        Approval::from_column(self.approved)
    }
}

/// Fully-resolved scalar columns written on every save.
///
/// Both the create DTO and the (existing row ⊕ patch) merge produced during
/// updates resolve to this one shape, which is what gets validated and bound.
#[derive(Debug, Clone)]
pub struct ProjectColumns {
    pub title: String,
    pub company_name: String,
    pub company_address: String,
    pub company_site: String,
    pub github_site: Option<String>,
    pub application_site: Option<String>,
    pub mission_statement: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_email: String,
    pub contact_number: String,
    pub contact_hours: String,
    pub nonprofit: bool,
    pub five_01c3: bool,
    pub photo: Option<String>,
}

impl ProjectColumns {
    /// Borrowed view for the core validator.
    pub fn fields(&self) -> ProjectFields<'_> {
        ProjectFields {
            title: &self.title,
            company_name: &self.company_name,
            company_address: &self.company_address,
            company_site: &self.company_site,
            github_site: self.github_site.as_deref(),
            application_site: self.application_site.as_deref(),
            mission_statement: &self.mission_statement,
            contact_name: &self.contact_name,
            contact_position: &self.contact_position,
            contact_email: &self.contact_email,
            contact_number: &self.contact_number,
            contact_hours: &self.contact_hours,
        }
    }
}

/// DTO for creating a new project (any authenticated caller; the creator
/// becomes the owner).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub company_name: String,
    pub company_address: String,
    pub company_site: String,
    pub github_site: Option<String>,
    pub application_site: Option<String>,
    pub mission_statement: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_email: String,
    pub contact_number: String,
    pub contact_hours: String,
    pub nonprofit: Option<bool>,
    pub five_01c3: Option<bool>,
    pub photo: Option<String>,
    /// Transient answers keyed by question id.
    pub answers: Option<IncomingAnswers>,
}

impl CreateProject {
    pub fn columns(&self) -> ProjectColumns {
        ProjectColumns {
            title: self.title.clone(),
            company_name: self.company_name.clone(),
            company_address: self.company_address.clone(),
            company_site: self.company_site.clone(),
            github_site: self.github_site.clone(),
            application_site: self.application_site.clone(),
            mission_statement: self.mission_statement.clone(),
            contact_name: self.contact_name.clone(),
            contact_position: self.contact_position.clone(),
            contact_email: self.contact_email.clone(),
            contact_number: self.contact_number.clone(),
            contact_hours: self.contact_hours.clone(),
            nonprofit: self.nonprofit.unwrap_or(false),
            five_01c3: self.five_01c3.unwrap_or(false),
            photo: self.photo.clone(),
        }
    }
}

/// DTO for owner-tier updates. All fields optional; absent fields keep their
/// stored values. Owners cannot touch `approved`, `state`, or `user_id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerUpdateProject {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_site: Option<String>,
    pub github_site: Option<String>,
    pub application_site: Option<String>,
    pub mission_statement: Option<String>,
    pub contact_name: Option<String>,
    pub contact_position: Option<String>,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub contact_hours: Option<String>,
    pub nonprofit: Option<bool>,
    pub five_01c3: Option<bool>,
    pub photo: Option<String>,
    /// Transient answers keyed by question id.
    pub answers: Option<IncomingAnswers>,
}

impl OwnerUpdateProject {
    /// Resolve the patch against the existing row.
    pub fn apply_to(&self, existing: &Project) -> ProjectColumns {
        ProjectColumns {
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            company_name: self
                .company_name
                .clone()
                .unwrap_or_else(|| existing.company_name.clone()),
            company_address: self
                .company_address
                .clone()
                .unwrap_or_else(|| existing.company_address.clone()),
            company_site: self
                .company_site
                .clone()
                .unwrap_or_else(|| existing.company_site.clone()),
            github_site: self.github_site.clone().or_else(|| existing.github_site.clone()),
            application_site: self
                .application_site
                .clone()
                .or_else(|| existing.application_site.clone()),
            mission_statement: self
                .mission_statement
                .clone()
                .unwrap_or_else(|| existing.mission_statement.clone()),
            contact_name: self
                .contact_name
                .clone()
                .unwrap_or_else(|| existing.contact_name.clone()),
            contact_position: self
                .contact_position
                .clone()
                .unwrap_or_else(|| existing.contact_position.clone()),
            contact_email: self
                .contact_email
                .clone()
                .unwrap_or_else(|| existing.contact_email.clone()),
            contact_number: self
                .contact_number
                .clone()
                .unwrap_or_else(|| existing.contact_number.clone()),
            contact_hours: self
                .contact_hours
                .clone()
                .unwrap_or_else(|| existing.contact_hours.clone()),
            nonprofit: self.nonprofit.unwrap_or(existing.nonprofit),
            five_01c3: self.five_01c3.unwrap_or(existing.five_01c3),
            photo: self.photo.clone().or_else(|| existing.photo.clone()),
        }
    }
}

/// DTO for admin-tier updates: everything an owner may set, plus the
/// completion state and reassignment of the owning user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUpdateProject {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_site: Option<String>,
    pub github_site: Option<String>,
    pub application_site: Option<String>,
    pub mission_statement: Option<String>,
    pub contact_name: Option<String>,
    pub contact_position: Option<String>,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub contact_hours: Option<String>,
    pub nonprofit: Option<bool>,
    pub five_01c3: Option<bool>,
    pub photo: Option<String>,
    pub state: Option<ProjectState>,
    pub user_id: Option<DbId>,
    /// Transient answers keyed by question id.
    pub answers: Option<IncomingAnswers>,
}

impl AdminUpdateProject {
    /// Resolve the patch against the existing row.
    pub fn apply_to(&self, existing: &Project) -> (ProjectColumns, ProjectState, DbId) {
        let owner_patch = OwnerUpdateProject {
            title: self.title.clone(),
            company_name: self.company_name.clone(),
            company_address: self.company_address.clone(),
            company_site: self.company_site.clone(),
            github_site: self.github_site.clone(),
            application_site: self.application_site.clone(),
            mission_statement: self.mission_statement.clone(),
            contact_name: self.contact_name.clone(),
            contact_position: self.contact_position.clone(),
            contact_email: self.contact_email.clone(),
            contact_number: self.contact_number.clone(),
            contact_hours: self.contact_hours.clone(),
            nonprofit: self.nonprofit,
            five_01c3: self.five_01c3,
            photo: self.photo.clone(),
            answers: self.answers.clone(),
        };
        (
            owner_patch.apply_to(existing),
            self.state.unwrap_or(existing.state),
            self.user_id.unwrap_or(existing.user_id),
        )
    }
}
