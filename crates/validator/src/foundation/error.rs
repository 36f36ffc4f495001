//! Error type for failed validation
//!
//! [`FieldErrors`] is the terminal form of a failed
//! [`Validator`](super::Validator): an ordered `field -> message` map that
//! implements [`std::error::Error`] so it can travel through `?`.

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Iter;

/// Ordered mapping from field key to its error message.
pub type ErrorMap = IndexMap<Cow<'static, str>, Cow<'static, str>>;

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// Every field that failed validation, with one message each.
///
/// Produced by [`Validator::into_result`](super::Validator::into_result) and
/// never empty when obtained that way.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::prelude::*;
///
/// let mut v = Validator::new();
/// v.check(false, "name", "must be provided");
/// let err = v.into_result().unwrap_err();
///
/// assert_eq!(err.to_string(), "validation failed with 1 error(s): name: must be provided");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[error("validation failed with {} error(s): {}", .errors.len(), render(&.errors))]
pub struct FieldErrors {
    errors: ErrorMap,
}

impl FieldErrors {
    pub(crate) fn new(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// Returns the message recorded for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(AsRef::as_ref)
    }

    /// Returns true if `key` failed validation.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over `(field, message)` pairs in recording order.
    pub fn iter(&self) -> Iter<'_, Cow<'static, str>, Cow<'static, str>> {
        self.errors.iter()
    }

    /// Borrows the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &ErrorMap {
        &self.errors
    }

    /// Consumes the error, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> ErrorMap {
        self.errors
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Cow<'static, str>, &'a Cow<'static, str>);
    type IntoIter = Iter<'a, Cow<'static, str>, Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

fn render(errors: &ErrorMap) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// TESTS
// ============================================================================
