//! Search filter normalization and pagination helpers.
//!
//! This module lives in `core` (zero internal deps) so the filter semantics
//! can be unit-tested without a database; the repository layer renders the
//! filters into SQL.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of listing results per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of listing results per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1).min(MAX_PAGE_LIMIT)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Search filters
// ---------------------------------------------------------------------------

/// Raw search parameters as they arrive on the query string.
///
/// Presence of the `nonprofit` / `five_01c3` / `forprofit` / `state` keys is
/// what matters, not their values, so they deserialize as `Option<String>`.
#[derive(Debug, Default, Deserialize)]
pub struct RawSearchParams {
    pub nonprofit: Option<String>,
    pub five_01c3: Option<String>,
    pub forprofit: Option<String>,
    pub search_string: Option<String>,
    pub state: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Normalized search filters; each `false` / `None` means "filter skipped
/// entirely", never "filter matching everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restrict to nonprofit = TRUE.
    pub nonprofit: bool,
    /// Restrict to five_01c3 = TRUE.
    pub five_01c3: bool,
    /// Restrict to nonprofit = FALSE. Supplying both `nonprofit` and
    /// `forprofit` applies both predicates; callers must treat the pair as
    /// mutually exclusive by convention.
    pub forprofit: bool,
    /// Case-insensitive substring matched against title OR company_name.
    pub search_string: Option<String>,
    /// Restrict to finished projects.
    pub finished: bool,
}

impl SearchFilters {
    /// Normalize raw query parameters: key presence sets the flags, an
    /// empty or whitespace-only search string becomes absent.
    pub fn from_params(params: &RawSearchParams) -> Self {
        SearchFilters {
            nonprofit: params.nonprofit.is_some(),
            five_01c3: params.five_01c3.is_some(),
            forprofit: params.forprofit.is_some(),
            search_string: normalize_search_string(params.search_string.as_deref()),
            finished: params.state.is_some(),
        }
    }
}

/// Trim a raw search string, mapping empty input to `None`.
pub fn normalize_search_string(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_produce_no_filters() {
        let filters = SearchFilters::from_params(&RawSearchParams::default());
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn flag_presence_matters_not_value() {
        let params = RawSearchParams {
            nonprofit: Some(String::new()),
            forprofit: Some("0".to_string()),
            ..Default::default()
        };
        let filters = SearchFilters::from_params(&params);
        assert!(filters.nonprofit);
        assert!(filters.forprofit);
        assert!(!filters.five_01c3);
    }

    #[test]
    fn empty_search_string_is_skipped() {
        let params = RawSearchParams {
            search_string: Some("   ".to_string()),
            ..Default::default()
        };
        let filters = SearchFilters::from_params(&params);
        assert_eq!(filters.search_string, None);
    }

    #[test]
    fn search_string_is_trimmed() {
        assert_eq!(
            normalize_search_string(Some("  water ")),
            Some("water".to_string())
        );
    }

    #[test]
    fn state_presence_restricts_to_finished() {
        let params = RawSearchParams {
            state: Some("true".to_string()),
            ..Default::default()
        };
        assert!(SearchFilters::from_params(&params).finished);
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(500)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-3)), 1);
        assert_eq!(clamp_limit(Some(50)), 50);
    }

    #[test]
    fn clamp_offset_bounds() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-1)), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }
}
