//! Field-level validation rules for project records.
//!
//! The validator reports every violation at once so the caller can surface
//! them together. Uniqueness is not checked here; the db layer pre-checks it
//! and the database unique constraints remain the authoritative guard.

use std::sync::LazyLock;

use serde::Serialize;

/// Minimum length for title and mission statement.
pub const MIN_TEXT_LENGTH: usize = 4;

/// Permissive URL shape: no whitespace, optional scheme, at least one
/// non-separator character. Loose on purpose; listings carry all kinds of
/// path-like values.
static URL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?[-+=&;%@.\w_~#/?]+$").expect("valid regex")
});

/// Standard `local@domain.tld` email shape.
static EMAIL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[_a-z0-9-]+(\.[_a-z0-9-]+)*@[a-z0-9-]+(\.[a-z0-9-]+)*\.[a-z]{2,4}$")
        .expect("valid regex")
});

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

/// Aggregated result of evaluating all rules against one candidate record.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

/// Borrowed view of the validated fields of a project candidate.
///
/// Both the create DTO and the (existing ⊕ patch) merge produced during
/// updates are validated through this one shape.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFields<'a> {
    pub title: &'a str,
    pub company_name: &'a str,
    pub company_address: &'a str,
    pub company_site: &'a str,
    pub github_site: Option<&'a str>,
    pub application_site: Option<&'a str>,
    pub mission_statement: &'a str,
    pub contact_name: &'a str,
    pub contact_position: &'a str,
    pub contact_email: &'a str,
    pub contact_number: &'a str,
    pub contact_hours: &'a str,
}

/// Evaluate all field rules against a candidate project.
///
/// Rules:
/// - presence (non-blank): title, company_site, company_address,
///   company_name, mission_statement, contact_name, contact_position,
///   contact_email, contact_number, contact_hours
/// - minimum length 4: title, mission_statement
/// - URL format (blank-exempt): company_site, github_site
/// - email format (blank-exempt): contact_email
pub fn validate_project(fields: &ProjectFields<'_>) -> ValidationResult {
    let mut violations = Vec::new();

    let required: &[(&'static str, &str)] = &[
        ("title", fields.title),
        ("company_site", fields.company_site),
        ("company_address", fields.company_address),
        ("company_name", fields.company_name),
        ("mission_statement", fields.mission_statement),
        ("contact_name", fields.contact_name),
        ("contact_position", fields.contact_position),
        ("contact_email", fields.contact_email),
        ("contact_number", fields.contact_number),
        ("contact_hours", fields.contact_hours),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            violations.push(FieldViolation {
                field,
                rule: "required",
                message: format!("{field} must not be blank"),
            });
        }
    }

    for (field, value) in [
        ("title", fields.title),
        ("mission_statement", fields.mission_statement),
    ] {
        if !value.trim().is_empty() && value.chars().count() < MIN_TEXT_LENGTH {
            violations.push(FieldViolation {
                field,
                rule: "too_short",
                message: format!("{field} must be at least {MIN_TEXT_LENGTH} characters"),
            });
        }
    }

    let urls: &[(&'static str, Option<&str>)] = &[
        ("company_site", Some(fields.company_site)),
        ("github_site", fields.github_site),
    ];
    for (field, value) in urls {
        if let Some(v) = value {
            if !v.trim().is_empty() && !URL_RE.is_match(v) {
                violations.push(FieldViolation {
                    field,
                    rule: "format",
                    message: format!("{field} is not a valid URL"),
                });
            }
        }
    }

    let email = fields.contact_email;
    if !email.trim().is_empty() && !EMAIL_RE.is_match(email) {
        violations.push(FieldViolation {
            field: "contact_email",
            rule: "format",
            message: "contact_email is not a valid email address".to_string(),
        });
    }

    ValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ProjectFields<'static> {
        ProjectFields {
            title: "Clean Water",
            company_name: "Aqua Org",
            company_address: "1 Main St",
            company_site: "https://aqua.example.org",
            github_site: None,
            application_site: None,
            mission_statement: "Bring clean water to everyone",
            contact_name: "Dana",
            contact_position: "Director",
            contact_email: "dana@aqua.org",
            contact_number: "555-0100",
            contact_hours: "9-5",
        }
    }

    #[test]
    fn valid_candidate_passes() {
        let result = validate_project(&valid_fields());
        assert!(result.is_valid, "{:?}", result.violations);
    }

    #[test]
    fn blank_title_fails_presence() {
        let mut fields = valid_fields();
        fields.title = "  ";
        let result = validate_project(&fields);
        assert!(!result.is_valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.field == "title" && v.rule == "required"));
    }

    #[test]
    fn short_title_fails_min_length() {
        let mut fields = valid_fields();
        fields.title = "abc";
        let result = validate_project(&fields);
        assert!(result
            .violations
            .iter()
            .any(|v| v.field == "title" && v.rule == "too_short"));
    }

    #[test]
    fn short_mission_statement_fails_min_length() {
        let mut fields = valid_fields();
        fields.mission_statement = "hi";
        let result = validate_project(&fields);
        assert!(result
            .violations
            .iter()
            .any(|v| v.field == "mission_statement" && v.rule == "too_short"));
    }

    #[test]
    fn blank_title_reports_presence_not_length() {
        // A blank value should not pile on a too_short violation as well.
        let mut fields = valid_fields();
        fields.title = "";
        let result = validate_project(&fields);
        let title_rules: Vec<_> = result
            .violations
            .iter()
            .filter(|v| v.field == "title")
            .map(|v| v.rule)
            .collect();
        assert_eq!(title_rules, vec!["required"]);
    }

    #[test]
    fn bad_email_fails_format() {
        let mut fields = valid_fields();
        fields.contact_email = "not-an-email";
        let result = validate_project(&fields);
        assert!(result
            .violations
            .iter()
            .any(|v| v.field == "contact_email" && v.rule == "format"));
    }

    #[test]
    fn email_with_subdomain_passes() {
        let mut fields = valid_fields();
        fields.contact_email = "first.last@mail.aqua.org";
        assert!(validate_project(&fields).is_valid);
    }

    #[test]
    fn url_with_whitespace_fails_format() {
        let mut fields = valid_fields();
        fields.company_site = "http://a site.example";
        let result = validate_project(&fields);
        assert!(result
            .violations
            .iter()
            .any(|v| v.field == "company_site" && v.rule == "format"));
    }

    #[test]
    fn blank_github_site_is_exempt_from_format() {
        let mut fields = valid_fields();
        fields.github_site = Some("");
        assert!(validate_project(&fields).is_valid);
    }

    #[test]
    fn schemeless_url_passes() {
        let mut fields = valid_fields();
        fields.github_site = Some("github.com/aqua/water");
        assert!(validate_project(&fields).is_valid);
    }

    #[test]
    fn all_blank_reports_every_required_field() {
        let fields = ProjectFields {
            title: "",
            company_name: "",
            company_address: "",
            company_site: "",
            github_site: None,
            application_site: None,
            mission_statement: "",
            contact_name: "",
            contact_position: "",
            contact_email: "",
            contact_number: "",
            contact_hours: "",
        };
        let result = validate_project(&fields);
        assert_eq!(result.violations.len(), 10);
    }
}
