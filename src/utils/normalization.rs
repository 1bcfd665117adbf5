//! Normalization Utilities
//!
//! Turns free-text institution identifiers into registry slugs.

/// Normalize an institution identifier into a registry slug.
///
/// Lowercases the input, trims surrounding whitespace and replaces every
/// internal run of whitespace with a single hyphen, so `"Visayas State"`,
/// `" visayas   state "` and `"visayas-state"` all resolve to the same key.
///
/// # Examples
/// ```
/// use thesis_structure_adapter::utils::normalize_slug;
///
/// assert_eq!(normalize_slug("PUP"), "pup");
/// assert_eq!(normalize_slug("Central  Mindanao University"), "central-mindanao-university");
/// ```
pub fn normalize_slug(institution: &str) -> String {
    institution
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
