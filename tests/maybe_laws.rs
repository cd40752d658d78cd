//! Property-based tests for Maybe<T> equality, hashing and combinators.

#![cfg(feature = "control")]

use lambars_seq::control::Maybe;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        1 => Just(Maybe::None),
        4 => any::<i32>().prop_map(Maybe::Some),
    ]
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Equality and Hash Laws
// =============================================================================

proptest! {
    /// Equality matches payload equality.
    #[test]
    fn prop_some_equality_follows_payload(left: i32, right: i32) {
        prop_assert_eq!(Maybe::Some(left) == Maybe::Some(right), left == right);
    }

    /// Some is never equal to None.
    #[test]
    fn prop_some_never_equals_none(value: i32) {
        prop_assert_ne!(Maybe::Some(value), Maybe::None);
    }

    /// Equal values have equal hashes.
    #[test]
    fn prop_hash_consistent_with_equality(left in arb_maybe_i32(), right in arb_maybe_i32()) {
        if left == right {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
    }

    /// Some(v) hashes exactly like v.
    #[test]
    fn prop_some_hashes_like_payload(value in ".*") {
        prop_assert_eq!(hash_of(&Maybe::Some(value.clone())), hash_of(&value));
    }
}

// =============================================================================
// Functor / Monad Laws
// =============================================================================

proptest! {
    /// map(id) == id
    #[test]
    fn prop_map_identity(maybe in arb_maybe_i32()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    /// map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(maybe in arb_maybe_i32()) {
        let function = |x: i32| x.wrapping_mul(3);
        let other = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(maybe.map(function).map(other), maybe.map(|x| other(function(x))));
    }

    /// some(a).bind(f) == f(a)
    #[test]
    fn prop_bind_left_identity(value: i32) {
        let function = |x: i32| if x > 0 { Maybe::Some(x / 2) } else { Maybe::None };
        prop_assert_eq!(Maybe::some(value).bind(function), function(value));
    }

    /// m.bind(some) == m
    #[test]
    fn prop_bind_right_identity(maybe in arb_maybe_i32()) {
        prop_assert_eq!(maybe.bind(Maybe::some), maybe);
    }

    /// The Option conversion preserves the presence of a value.
    #[test]
    fn prop_option_conversion_agrees_with_is_some(maybe in arb_maybe_i32()) {
        prop_assert_eq!(maybe.to_option().is_some(), maybe.is_some());
    }
}
