//! Traversal of two or three sequences in lockstep.
//!
//! Every function here stops as soon as any input runs out: the shortest
//! sequence decides the length, and no padding is ever produced. Inputs are
//! polled in argument order, so when `first` is exhausted `second` is not
//! polled for that step at all.

use std::iter::{FusedIterator, Zip};

/// Returns `true` if `predicate` holds for every pair taken in lockstep.
///
/// Stops at the first failing pair. Pairs beyond the end of the shorter
/// sequence are never inspected, so two sequences of different lengths can
/// still satisfy `forall2`.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::forall2;
///
/// assert!(forall2(vec![1, 2, 3], vec![2, 3, 4, 0], |left, right| left < right));
/// assert!(!forall2(vec![1, 5], vec![2, 3], |left, right| left < right));
/// ```
pub fn forall2<A, B, P>(first: A, second: B, mut predicate: P) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    P: FnMut(A::Item, B::Item) -> bool,
{
    zip(first, second).all(|(left, right)| predicate(left, right))
}

/// Returns `true` if `predicate` holds for at least one pair taken in
/// lockstep.
///
/// Stops at the first satisfying pair.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::exists2;
///
/// assert!(exists2(vec![1, 2, 3], vec![3, 2, 1], |left, right| left == right));
/// assert!(!exists2(Vec::<i32>::new(), vec![1], |left, right| left == right));
/// ```
pub fn exists2<A, B, P>(first: A, second: B, mut predicate: P) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    P: FnMut(A::Item, B::Item) -> bool,
{
    zip(first, second).any(|(left, right)| predicate(left, right))
}

/// Invokes `action` on every pair taken in lockstep, in order.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::iter2;
///
/// let mut lines = Vec::new();
/// iter2(["a", "b", "c"], 1.., |name, rank| lines.push(format!("{rank}:{name}")));
/// assert_eq!(lines, vec!["1:a", "2:b", "3:c"]);
/// ```
pub fn iter2<A, B, F>(first: A, second: B, mut action: F)
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item),
{
    zip(first, second).for_each(|(left, right)| action(left, right));
}

/// Lazily pairs up the elements of two sequences.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::zip;
///
/// let pairs: Vec<(i32, char)> = zip(vec![1, 2, 3], vec!['a', 'b']).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<A, B>(first: A, second: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    first.into_iter().zip(second)
}

/// Lazy sequence of triples produced by [`zip3`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> Iterator for Zip3<A, B, C>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
{
    type Item = (A::Item, B::Item, C::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.first.next()?;
        let second = self.second.next()?;
        let third = self.third.next()?;
        Some((first, second, third))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let hints = [
            self.first.size_hint(),
            self.second.size_hint(),
            self.third.size_hint(),
        ];
        let lower = hints.iter().map(|(lower, _)| *lower).min().unwrap_or(0);
        let upper = hints.iter().filter_map(|(_, upper)| *upper).min();
        (lower, upper)
    }
}

impl<A, B, C> FusedIterator for Zip3<A, B, C>
where
    A: FusedIterator,
    B: FusedIterator,
    C: FusedIterator,
{
}

/// Lazily groups the elements of three sequences into triples.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::zip3;
///
/// let triples: Vec<(i32, char, bool)> =
///     zip3(vec![1, 2, 3], vec!['a', 'b', 'c'], vec![true, false]).collect();
/// assert_eq!(triples, vec![(1, 'a', true), (2, 'b', false)]);
/// ```
pub fn zip3<A, B, C>(
    first: A,
    second: B,
    third: C,
) -> Zip3<A::IntoIter, B::IntoIter, C::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
{
    Zip3 {
        first: first.into_iter(),
        second: second.into_iter(),
        third: third.into_iter(),
    }
}

static_assertions::assert_impl_all!(
    Zip3<std::vec::IntoIter<i32>, std::ops::Range<u8>, std::vec::IntoIter<String>>: Send, Sync
);
