//! Collection element predicates

use std::collections::HashSet;
use std::hash::Hash;

// ============================================================================
// PERMITTED VALUE
// ============================================================================

/// Returns true if `value` equals one of `permitted`.
///
/// An empty `permitted` list permits nothing.
///
/// ```rust
/// use fieldcheck_validator::validators::permitted_value;
///
/// let sort = "-year";
/// assert!(permitted_value(&sort, &["id", "title", "year", "-id", "-title", "-year"]));
/// assert!(!permitted_value(&5, &[]));
/// ```
#[must_use]
pub fn permitted_value<T>(value: &T, permitted: &[T]) -> bool
where
    T: PartialEq,
{
    permitted.contains(value)
}

// ============================================================================
// UNIQUE
// ============================================================================

/// Returns true if no two elements of `values` are equal.
///
/// Requires `Eq + Hash`: element types without a sound hash (floats, for
/// instance) cannot be checked this way.
///
/// ```rust
/// use fieldcheck_validator::validators::unique;
///
/// assert!(unique(&["drama", "crime"]));
/// assert!(!unique(&["drama", "drama"]));
/// assert!(unique::<u8>(&[]));
/// ```
#[must_use]
pub fn unique<T>(values: &[T]) -> bool
where
    T: Eq + Hash,
{
    let distinct: HashSet<&T> = values.iter().collect();
    distinct.len() == values.len()
}

// ============================================================================
// TESTS
// ============================================================================
