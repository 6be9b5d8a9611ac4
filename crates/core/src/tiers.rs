//! Well-known permission tier constants.
//!
//! The identity collaborator injects the acting user's tier with each
//! request; these must match the values it sends.

pub const TIER_PUBLIC: &str = "public";
pub const TIER_OWNER: &str = "owner";
pub const TIER_ADMIN: &str = "admin";

/// All valid tier values, lowest to highest.
pub const VALID_TIERS: &[&str] = &[TIER_PUBLIC, TIER_OWNER, TIER_ADMIN];

/// Check whether a tier string is one of the accepted values.
pub fn is_valid_tier(tier: &str) -> bool {
    VALID_TIERS.contains(&tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers_accepted() {
        assert!(is_valid_tier(TIER_PUBLIC));
        assert!(is_valid_tier(TIER_OWNER));
        assert!(is_valid_tier(TIER_ADMIN));
    }

    #[test]
    fn unknown_tier_rejected() {
        assert!(!is_valid_tier("superuser"));
        assert!(!is_valid_tier(""));
        assert!(!is_valid_tier("ADMIN"));
    }
}
