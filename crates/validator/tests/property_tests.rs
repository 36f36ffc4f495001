//! Property-based tests for fieldcheck-validator.

use std::collections::{HashMap, HashSet};

use fieldcheck_validator::prelude::*;
use proptest::prelude::*;

/// One `check` call: outcome, field key, message.
fn check_call() -> impl Strategy<Value = (bool, String, String)> {
    (any::<bool>(), "[a-e]", "[a-z ]{1,12}")
}

// ============================================================================
// ACCUMULATOR: valid() iff nothing failed
// ============================================================================

proptest! {
    #[test]
    fn valid_iff_no_failed_check(calls in prop::collection::vec(check_call(), 0..20)) {
        let mut v = Validator::new();
        for (ok, key, message) in &calls {
            v.check(*ok, key.clone(), message.clone());
        }
        let any_failed = calls.iter().any(|(ok, _, _)| !ok);
        prop_assert_eq!(v.valid(), !any_failed);
        prop_assert_eq!(v.valid(), v.into_result().is_ok());
    }

    #[test]
    fn recorded_keys_bounded_by_distinct_keys(calls in prop::collection::vec(check_call(), 0..20)) {
        let mut v = Validator::new();
        for (ok, key, message) in &calls {
            v.check(*ok, key.clone(), message.clone());
        }
        let distinct: HashSet<&String> = calls.iter().map(|(_, key, _)| key).collect();
        prop_assert!(v.len() <= distinct.len());
    }

    #[test]
    fn first_failure_per_key_is_kept(calls in prop::collection::vec(check_call(), 0..20)) {
        let mut v = Validator::new();
        let mut expected: HashMap<String, String> = HashMap::new();
        for (ok, key, message) in &calls {
            v.check(*ok, key.clone(), message.clone());
            if !ok {
                expected.entry(key.clone()).or_insert_with(|| message.clone());
            }
        }
        prop_assert_eq!(v.len(), expected.len());
        for (key, message) in &expected {
            prop_assert_eq!(v.get(key), Some(message.as_str()));
        }
    }

    #[test]
    fn add_error_never_overwrites(key in "[a-z]{1,8}", m1 in "[a-z]{1,8}", m2 in "[a-z]{1,8}") {
        let mut v = Validator::new();
        v.add_error(key.clone(), m1.clone());
        v.add_error(key.clone(), m2);
        prop_assert_eq!(v.get(&key), Some(m1.as_str()));
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

proptest! {
    #[test]
    fn permitted_value_agrees_with_membership(x in 0u8..10, set in prop::collection::vec(0u8..10, 0..6)) {
        prop_assert_eq!(permitted_value(&x, &set), set.iter().any(|p| *p == x));
    }

    #[test]
    fn permitted_value_empty_is_false(x in any::<i64>()) {
        prop_assert!(!permitted_value(&x, &[]));
    }

    #[test]
    fn unique_agrees_with_pairwise_comparison(values in prop::collection::vec(0u8..16, 0..12)) {
        let pairwise = values
            .iter()
            .enumerate()
            .all(|(i, a)| values[i + 1..].iter().all(|b| a != b));
        prop_assert_eq!(unique(&values), pairwise);
    }

    #[test]
    fn duplicating_any_element_breaks_uniqueness(values in prop::collection::vec(any::<u32>(), 1..12), idx in any::<prop::sample::Index>()) {
        let mut values = values;
        let dup = values[idx.index(values.len())];
        values.push(dup);
        prop_assert!(!unique(&values));
    }

    #[test]
    fn email_match_is_idempotent(s in ".*") {
        prop_assert_eq!(matches(&s, &EMAIL_RX), matches(&s, &EMAIL_RX));
    }

    #[test]
    fn email_requires_at_sign(s in "[^@]*") {
        prop_assert!(!matches(&s, &EMAIL_RX));
    }
}
