//! URL-safe slug derivation from project titles.
//!
//! Collision handling (suffixing `-2`, `-3`, ...) needs the existing slugs
//! and therefore lives in the repository layer; this module only derives the
//! base slug.

/// Derive a URL-safe slug from a title.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single `-`,
/// and trims leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Append a collision counter to a base slug (`water`, `water-2`, ...).
pub fn suffixed(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}
