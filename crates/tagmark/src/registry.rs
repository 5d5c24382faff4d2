//! The fixed set of tag names the parser recognizes.
//!
//! The registry is a compile-time ordered set, so it is immutable and shared
//! by every parse without synchronization. Callers only ever see copies.

use phf::phf_ordered_set;

/// Canonical (lowercase) tag names, in their canonical order.
static SUPPORTED_TAGS: phf::OrderedSet<&'static str> = phf_ordered_set! {
    "button",
    "tag",
    "link",
    "input",
    "select",
    "switch",
    "alert",
    "dialog",
    "progress",
    "badge",
};

/// Check whether `name` is a supported tag, ignoring case.
///
/// # Examples
///
/// ```
/// assert!(tagmark::is_supported_tag("Button"));
/// assert!(!tagmark::is_supported_tag("div"));
/// ```
pub fn is_supported_tag(name: &str) -> bool {
    SUPPORTED_TAGS.contains(name.to_lowercase().as_str())
}

/// Return a fresh copy of the supported tag names, lowercase, in canonical order.
///
/// # Examples
///
/// ```
/// let mut tags = tagmark::supported_tags();
/// assert_eq!(tags.len(), 10);
/// tags.clear();
/// assert_eq!(tagmark::supported_tags().len(), 10);
/// ```
pub fn supported_tags() -> Vec<String> {
    SUPPORTED_TAGS.iter().map(|name| name.to_string()).collect()
}

/// Find the registered name that `input` starts with, comparing ASCII
/// case-insensitively. Returns the canonical name.
pub(crate) fn match_prefix(input: &str) -> Option<&'static str> {
    SUPPORTED_TAGS.iter().copied().find(|name| {
        input
            .get(..name.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
    })
}
