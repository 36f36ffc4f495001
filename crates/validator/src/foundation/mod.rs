//! Core validation types
//!
//! - **Accumulator**: [`Validator`]
//! - **Errors**: [`FieldErrors`]
//!
//! # Architecture
//!
//! Validation is split in two halves. Predicates (see
//! [`validators`](crate::validators)) answer yes/no about a single value and
//! carry no state. The [`Validator`] remembers which fields failed and why.
//!
//! ```rust
//! use fieldcheck_validator::foundation::Validator;
//!
//! let mut v = Validator::new();
//! v.check("Ada".len() <= 500, "name", "must not be more than 500 bytes long");
//! v.check(1999 >= 1888, "year", "must be greater than 1888");
//! assert!(v.into_result().is_ok());
//! ```
//!
// Module declarations
pub mod error;
pub mod validator;

pub use error::FieldErrors;
pub use validator::Validator;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result carrying every failed field on error.
pub type ValidationResult<T> = Result<T, FieldErrors>;
