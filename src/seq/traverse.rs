//! Single-sequence companions of the lockstep functions.

use std::iter::{FlatMap, Once};

/// Returns `true` if `predicate` holds for every element.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::forall;
///
/// assert!(forall(vec![2, 4, 6], |number| number % 2 == 0));
/// assert!(forall(Vec::<i32>::new(), |_| false));
/// ```
pub fn forall<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    sequence.into_iter().all(predicate)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::exists;
///
/// assert!(exists(1.., |number| number > 100));
/// ```
pub fn exists<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    sequence.into_iter().any(predicate)
}

/// Invokes `action` on every element, in order.
pub fn iter<I, F>(sequence: I, action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    sequence.into_iter().for_each(action);
}

/// Maps every element to a sequence and concatenates the results lazily.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::collect;
///
/// let expanded: Vec<u32> =
///     collect(vec![1, 2, 3], |count| std::iter::repeat_n(count, count as usize)).collect();
/// assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn collect<I, U, F>(sequence: I, function: F) -> FlatMap<I::IntoIter, U, F>
where
    I: IntoIterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    sequence.into_iter().flat_map(function)
}

/// A sequence holding exactly one element, `T::default()`.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::singleton;
///
/// let only: Vec<String> = singleton().collect();
/// assert_eq!(only, vec![String::new()]);
/// ```
pub fn singleton<T: Default>() -> Once<T> {
    std::iter::once(T::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_forall_short_circuits() {
        let mut checked = 0;
        let result = forall(0..10, |number| {
            checked += 1;
            number < 2
        });
        assert!(!result);
        assert_eq!(checked, 3);
    }

    #[rstest]
    fn test_exists_on_empty_is_false() {
        assert!(!exists(Vec::<i32>::new(), |_| true));
    }

    #[rstest]
    fn test_iter_visits_in_order() {
        let mut visited = Vec::new();
        iter(vec!["a", "b"], |item| visited.push(item));
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[rstest]
    fn test_collect_skips_empty_expansions() {
        let words: Vec<char> = collect(vec!["ab", "", "c"], str::chars).collect();
        assert_eq!(words, vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn test_singleton_yields_default_once() {
        let values: Vec<i32> = singleton().collect();
        assert_eq!(values, vec![0]);
    }
}
