use serde::{Deserialize, Serialize};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Completion state of a project listing.
///
/// Stored as an integer column so further states can be added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "lowercase")]
pub enum ProjectState {
    Unfinished = 1,
    Finished = 2,
}

impl Default for ProjectState {
    fn default() -> Self {
        ProjectState::Unfinished
    }
}
