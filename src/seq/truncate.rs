//! Bounded prefix of a sequence.

use std::iter::FusedIterator;

/// Lazy prefix produced by [`truncate`].
///
/// Holds the number of elements it may still yield; the source is never
/// polled once that budget reaches zero.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Truncate<I> {
    iterator: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for Truncate<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iterator.next() {
            Some(element) => {
                self.remaining -= 1;
                Some(element)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iterator.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Truncate<I> {}

/// Yields the elements of `sequence` in order, stopping after `count + 1`
/// of them.
///
/// Note the off-by-one: `truncate(sequence, 2)` yields up to **three**
/// elements. This is the historical behaviour of `truncate` in this library
/// and is kept so existing callers see the same prefixes; use
/// [`Iterator::take`] for an exact bound. A `count` of `usize::MAX`
/// saturates instead of overflowing.
///
/// A source shorter than `count + 1` simply ends early. At most `count + 1`
/// elements are ever pulled from the source, so infinite sequences are safe.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::truncate;
///
/// let prefix: Vec<i32> = truncate(1.., 2).collect();
/// assert_eq!(prefix, vec![1, 2, 3]);
///
/// let short: Vec<i32> = truncate(vec![7], 5).collect();
/// assert_eq!(short, vec![7]);
/// ```
pub fn truncate<I>(sequence: I, count: usize) -> Truncate<I::IntoIter>
where
    I: IntoIterator,
{
    Truncate {
        iterator: sequence.into_iter(),
        remaining: count.saturating_add(1),
    }
}
