//! Unit tests for Maybe<T> type.
//!
//! Maybe represents an explicit presence or absence of a value:
//! - `None`: carries no payload
//! - `Some(T)`: carries exactly one payload

#![cfg(feature = "control")]

use lambars_seq::control::Maybe;
use lambars_seq::error::InvalidOperationError;
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn maybe_none_is_none() {
    let value: Maybe<i32> = Maybe::none();
    assert!(value.is_none());
    assert!(!value.is_some());
}

#[rstest]
fn maybe_some_is_some() {
    let value = Maybe::some("hello".to_string());
    assert!(value.is_some());
    assert!(!value.is_none());
}

#[rstest]
fn maybe_none_constructor_matches_variant() {
    assert_eq!(Maybe::<String>::none(), Maybe::None);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn maybe_none_equals_none() {
    assert_eq!(Maybe::<i32>::None, Maybe::None);
}

#[rstest]
fn maybe_some_equals_some_with_same_payload() {
    assert_eq!(Maybe::Some(5), Maybe::Some(5));
}

#[rstest]
fn maybe_some_differs_from_some_with_other_payload() {
    assert_ne!(Maybe::Some(5), Maybe::Some(6));
}

#[rstest]
fn maybe_some_differs_from_none() {
    assert_ne!(Maybe::Some(5), Maybe::None);
    assert_ne!(Maybe::None, Maybe::Some(5));
}

#[rstest]
fn maybe_works_as_hash_set_key() {
    let set: HashSet<Maybe<&str>> = [Maybe::Some("a"), Maybe::None, Maybe::Some("a"), Maybe::None]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Maybe::None));
    assert!(set.contains(&Maybe::Some("a")));
}

// =============================================================================
// Value Access
// =============================================================================

#[rstest]
fn maybe_value_on_some_returns_payload() {
    let value = Maybe::Some(42);
    assert_eq!(value.value(), Ok(&42));
}

#[rstest]
fn maybe_value_on_none_is_invalid_operation() {
    let value: Maybe<i32> = Maybe::None;
    assert_eq!(
        value.value(),
        Err(InvalidOperationError { operation: "value" })
    );
}

#[rstest]
fn maybe_into_value_moves_payload_out() {
    let value = Maybe::Some(vec![1, 2, 3]);
    assert_eq!(value.into_value(), Ok(vec![1, 2, 3]));
}

#[rstest]
fn maybe_invalid_operation_error_message() {
    let error = Maybe::<u8>::None.value().unwrap_err();
    assert_eq!(error.to_string(), "Maybe::value: called on a `None` value");
}

#[rstest]
#[case(Maybe::Some(3), 3)]
#[case(Maybe::None, 10)]
fn maybe_value_or(#[case] value: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(value.value_or(10), expected);
}

#[rstest]
fn maybe_value_or_else_is_lazy_for_some() {
    let mut called = false;
    let result = Maybe::Some(1).value_or_else(|| {
        called = true;
        0
    });
    assert_eq!(result, 1);
    assert!(!called);
}

#[rstest]
fn maybe_value_or_default() {
    assert_eq!(Maybe::<String>::None.value_or_default(), String::new());
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn maybe_map_on_none_stays_none() {
    let value: Maybe<i32> = Maybe::None;
    assert_eq!(value.map(|x| x.to_string()), Maybe::None);
}

#[rstest]
fn maybe_bind_chains_computations() {
    let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    assert_eq!(Maybe::Some("12").bind(parse), Maybe::Some(12));
    assert_eq!(Maybe::Some("twelve").bind(parse), Maybe::None);
}

#[rstest]
#[case(Maybe::Some(4), Maybe::Some(4))]
#[case(Maybe::Some(3), Maybe::None)]
#[case(Maybe::None, Maybe::None)]
fn maybe_filter(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(value.filter(|x| x % 2 == 0), expected);
}

#[rstest]
fn maybe_or_prefers_present_value() {
    assert_eq!(Maybe::Some(1).or(Maybe::Some(2)), Maybe::Some(1));
    assert_eq!(Maybe::None.or(Maybe::Some(2)), Maybe::Some(2));
}

#[rstest]
fn maybe_as_ref_does_not_consume() {
    let value = Maybe::Some("owned".to_string());
    assert_eq!(value.as_ref().map(String::len), Maybe::Some(5));
    assert_eq!(value, Maybe::Some("owned".to_string()));
}

// =============================================================================
// Conversion and Iteration
// =============================================================================

#[rstest]
fn maybe_from_option() {
    assert_eq!(Maybe::from(Some(1)), Maybe::Some(1));
    assert_eq!(Maybe::<i32>::from(None), Maybe::None);
}

#[rstest]
fn maybe_into_option() {
    let option: Option<i32> = Maybe::Some(1).into();
    assert_eq!(option, Some(1));
    assert_eq!(Maybe::<i32>::None.to_option(), None);
}

#[rstest]
fn maybe_iterates_zero_or_one_times() {
    assert_eq!(Maybe::Some(9).into_iter().collect::<Vec<_>>(), vec![9]);
    assert_eq!(Maybe::<i32>::None.into_iter().count(), 0);

    let borrowed = Maybe::Some(2);
    let total: i32 = (&borrowed).into_iter().sum();
    assert_eq!(total, 2);
    assert_eq!(borrowed.iter().len(), 1);
}

#[rstest]
fn maybe_flattens_in_iterator_chains() {
    let values = vec![Maybe::Some(1), Maybe::None, Maybe::Some(3)];
    let present: Vec<i32> = values.into_iter().flatten().collect();
    assert_eq!(present, vec![1, 3]);
}

#[rstest]
fn maybe_orders_none_first() {
    let mut values = vec![Maybe::Some(2), Maybe::None, Maybe::Some(1)];
    values.sort();
    assert_eq!(values, vec![Maybe::None, Maybe::Some(1), Maybe::Some(2)]);
}
