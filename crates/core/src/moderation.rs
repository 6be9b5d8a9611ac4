//! Approval tri-state for the moderation gate.
//!
//! A project starts pending and becomes visible to non-admin callers only
//! once approved. Admins may re-evaluate freely in either direction; there
//! are no automatic transitions.

use serde::{Deserialize, Serialize};

/// Moderation status of a project, stored as a nullable boolean column
/// (`NULL` = pending, `TRUE` = approved, `FALSE` = denied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approval {
    Pending,
    Approved,
    Denied,
}

impl Approval {
    /// Decode the nullable `approved` column.
    pub fn from_column(value: Option<bool>) -> Self {
        match value {
            None => Approval::Pending,
            Some(true) => Approval::Approved,
            Some(false) => Approval::Denied,
        }
    }

    /// Encode for the nullable `approved` column.
    pub fn to_column(self) -> Option<bool> {
        match self {
            Approval::Pending => None,
            Approval::Approved => Some(true),
            Approval::Denied => Some(false),
        }
    }

    pub fn is_approved(self) -> bool {
        self == Approval::Approved
    }
}

impl Default for Approval {
    fn default() -> Self {
        Approval::Pending
    }
}
