//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that brings
//! in the accumulator, its error type, and every predicate.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let mut v = Validator::new();
//! v.check(unique(&["a", "b"]), "tags", "must not contain duplicate values");
//! assert!(v.valid());
//! ```

// ============================================================================
// FOUNDATION: Accumulator and errors
// ============================================================================

pub use crate::foundation::{FieldErrors, ValidationResult, Validator};

// ============================================================================
// VALIDATORS: All built-in predicates
// ============================================================================

pub use crate::validators::{EMAIL_RX, matches, permitted_value, unique};
