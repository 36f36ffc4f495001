//! String content predicates
//!
//! Pattern matching over string input.

use std::sync::LazyLock;

use regex::Regex;

/// Sanity check for the shape of an email address.
///
/// The WHATWG "valid e-mail address" pattern: a permissive local part, then
/// dot-separated domain labels of 1 to 63 characters that neither start nor
/// end with a hyphen. Anchored at both ends.
///
/// ```rust
/// use fieldcheck_validator::validators::{EMAIL_RX, matches};
///
/// assert!(matches("alice@example.com", &EMAIL_RX));
/// assert!(!matches("alice@-example.com", &EMAIL_RX));
/// ```
pub static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern is a valid regex")
});

/// Returns true if `value` matches `pattern`.
///
/// Whole-string matching is up to the pattern: anchor it with `^...$`.
#[inline]
#[must_use]
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

// ============================================================================
// TESTS
// ============================================================================
