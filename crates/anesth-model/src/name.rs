//! Doctor name handling.
//!
//! Names in the published schedule are free text with an inconsistent
//! honorific: `Dr. Martin`, `Dr Martin`, `dr.Martin`. Two names are the same
//! doctor when their canonical forms are equal.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical honorific prefix.
pub const TITLE_PREFIX: &str = "Dr. ";

/// Returns the remainder of `name` after a leading `Dr`, an optional `.`
/// and any whitespace. `None` when there is no honorific.
pub fn strip_title(name: &str) -> Option<&str> {
    let head = name.get(..2)?;
    if !head.eq_ignore_ascii_case("dr") {
        return None;
    }
    let rest = &name[2..];
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    Some(rest.trim_start())
}

/// Rewrites the honorific of `name` to `Dr. ` and trims surrounding whitespace.
///
/// Names without an honorific are only trimmed.
pub fn canonical_name(name: &str) -> String {
    let trimmed = name.trim();
    match strip_title(trimmed) {
        Some(rest) => format!("{TITLE_PREFIX}{rest}").trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Name equivalence used by the lookup fallback.
pub fn names_equivalent(left: &str, right: &str) -> bool {
    canonical_name(left) == canonical_name(right)
}

/// A wide-layout cell holds a doctor when it starts with `Dr`.
pub fn looks_like_doctor(cell: &str) -> bool {
    cell.starts_with("Dr")
}

/// Sort key for the surgeon selector: honorific removed, lowercased and
/// accent-folded so `Dr Émile` sorts next to `Dr. Emile`.
pub fn display_sort_key(name: &str) -> String {
    let trimmed = name.trim();
    let bare = strip_title(trimmed).unwrap_or(trimmed);
    bare.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}
