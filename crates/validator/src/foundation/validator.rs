//! Error accumulator for field-level checks
//!
//! A [`Validator`] is created per validation attempt, fed the outcome of each
//! rule, and then inspected (or converted into a [`Result`]) by the caller.

use std::borrow::Cow;

use indexmap::map::{Entry, Iter};

use super::error::{ErrorMap, FieldErrors};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Collects at most one error message per field.
///
/// The first message recorded for a field is kept. Later failures for the
/// same field are discarded, so a specific early check ("must be provided")
/// is not replaced by a vaguer follow-up ("must be a valid email address").
///
/// Messages are reported in the order their fields first failed.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::foundation::Validator;
///
/// let title = "";
///
/// let mut v = Validator::new();
/// v.check(!title.is_empty(), "title", "must be provided");
/// v.check(title.len() <= 500, "title", "must not be more than 500 bytes long");
///
/// assert!(!v.valid());
/// assert_eq!(v.len(), 1);
/// assert_eq!(v.get("title"), Some("must be provided"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Validator {
    errors: ErrorMap,
}

impl Validator {
    /// Creates a validator with no recorded errors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: ErrorMap::new(),
        }
    }

    /// Returns true if no errors have been recorded.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records `message` for `key` unless `key` already has a message.
    pub fn add_error(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        match self.errors.entry(key.into()) {
            Entry::Vacant(slot) => {
                let message = message.into();
                tracing::trace!(field = %slot.key(), message = %message, "validation failed");
                slot.insert(message);
            }
            Entry::Occupied(slot) => {
                tracing::trace!(field = %slot.key(), "field already failed, keeping first message");
            }
        }
    }

    /// Records `message` for `key` when `ok` is false.
    ///
    /// This is the usual call site: evaluate the rule, pass the outcome.
    ///
    /// ```rust
    /// use fieldcheck_validator::prelude::*;
    ///
    /// let genres = ["drama", "drama"];
    ///
    /// let mut v = Validator::new();
    /// v.check(!genres.is_empty(), "genres", "must contain at least 1 genre");
    /// v.check(unique(&genres), "genres", "must not contain duplicate values");
    /// assert_eq!(v.get("genres"), Some("must not contain duplicate values"));
    /// ```
    pub fn check(
        &mut self,
        ok: bool,
        key: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        if !ok {
            self.add_error(key, message);
        }
    }

    /// Returns the message recorded for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(AsRef::as_ref)
    }

    /// Returns true if `key` has a recorded error.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    /// Number of fields with a recorded error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`valid`](Self::valid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded errors, in the order their fields first failed.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Iterates over `(field, message)` pairs in recording order.
    pub fn iter(&self) -> Iter<'_, Cow<'static, str>, Cow<'static, str>> {
        self.errors.iter()
    }

    /// Finishes validation.
    ///
    /// Returns `Ok(())` when nothing failed, otherwise every recorded error.
    ///
    /// ```rust
    /// use fieldcheck_validator::prelude::*;
    ///
    /// fn validate_role(role: &str) -> ValidationResult<()> {
    ///     let mut v = Validator::new();
    ///     v.check(permitted_value(&role, &["admin", "editor"]), "role", "is not permitted");
    ///     v.into_result()
    /// }
    ///
    /// assert!(validate_role("admin").is_ok());
    /// assert_eq!(validate_role("root").unwrap_err().get("role"), Some("is not permitted"));
    /// ```
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.valid() {
            Ok(())
        } else {
            Err(FieldErrors::new(self.errors))
        }
    }
}

impl<'a> IntoIterator for &'a Validator {
    type Item = (&'a Cow<'static, str>, &'a Cow<'static, str>);
    type IntoIter = Iter<'a, Cow<'static, str>, Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
