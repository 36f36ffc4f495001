//! Built-in predicates
//!
//! Stateless checks that answer yes/no for a single value. Feed the answer
//! to [`Validator::check`](crate::foundation::Validator::check).
//!
//! # Categories
//!
//! - **Content**: regex matching, email shape
//! - **Elements**: membership in a permitted set, uniqueness
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let mut v = Validator::new();
//! v.check(matches("dev@example.com", &EMAIL_RX), "email", "must be a valid email address");
//! v.check(permitted_value(&"asc", &["asc", "desc"]), "order", "invalid sort order");
//! v.check(unique(&[1, 2, 3]), "ids", "must not contain duplicate values");
//! assert!(v.valid());
//! ```

// String validators
pub mod content;

// Collection validators
pub mod elements;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{EMAIL_RX, matches};

pub use elements::{permitted_value, unique};
