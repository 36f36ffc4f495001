//! # fieldcheck-validator
//!
//! Field-level validation primitives for request and form input.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let name = "";
//! let email = "bad-email";
//!
//! let mut v = Validator::new();
//! v.check(!name.is_empty(), "name", "must be provided");
//! v.check(matches(email, &EMAIL_RX), "email", "must be a valid email address");
//!
//! assert!(!v.valid());
//! assert_eq!(v.get("name"), Some("must be provided"));
//! ```
//!
//! ## Building Blocks
//!
//! - [`Validator`](foundation::Validator) collects at most one message per
//!   field. The first failure recorded for a field wins.
//! - [`FieldErrors`](foundation::FieldErrors) is what a failed validator turns
//!   into via [`Validator::into_result`](foundation::Validator::into_result).
//! - Predicates: [`matches`](validators::matches) with the bundled
//!   [`EMAIL_RX`](validators::EMAIL_RX), [`permitted_value`](validators::permitted_value),
//!   and [`unique`](validators::unique).
//!
//! Callers decide what "valid" means for each field; the crate only records
//! the outcome.
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`Validator`](foundation::Validator) and
//!   [`FieldErrors`](foundation::FieldErrors) as a flat `{ field: message }`
//!   object, ready to embed in a response body.

pub mod foundation;
pub mod prelude;
pub mod validators;

pub use foundation::{FieldErrors, ValidationResult, Validator};
pub use validators::{EMAIL_RX, matches, permitted_value, unique};
