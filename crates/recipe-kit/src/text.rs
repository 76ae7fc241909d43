//! String helpers shared by clients and validation.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}").ok())
        .as_ref()
}

/// `true` when `value` is empty or only whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `value` without leading and trailing whitespace.
#[must_use]
pub fn trimmed(value: &str) -> &str {
    value.trim()
}

/// Loose email check: `true` when `value` contains something shaped like
/// `local@domain.tld`.
///
/// The pattern is searched, not anchored, so surrounding text is tolerated.
/// Recipe validation does not use this check.
///
/// # Examples
/// ```
/// use recipe_kit::text::is_valid_email;
///
/// assert!(is_valid_email("john.doe@example.com"));
/// assert!(!is_valid_email("john.doe@example"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(value))
}
