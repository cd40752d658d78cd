//! Adjacent pairs of a sequence.

use std::iter::FusedIterator;

/// Lazy sequence of adjacent pairs produced by [`pairwise`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Pairwise<I: Iterator> {
    iterator: I,
    previous: Option<I::Item>,
    started: bool,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.previous = self.iterator.next();
        }
        let previous = self.previous.take()?;
        let current = self.iterator.next()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iterator.size_hint();
        if self.started {
            if self.previous.is_none() {
                return (0, Some(0));
            }
            (lower, upper)
        } else {
            (lower.saturating_sub(1), upper.map(|upper| upper.saturating_sub(1)))
        }
    }
}

impl<I> FusedIterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Yields every pair of adjacent elements: `(a0, a1), (a1, a2), ...`.
///
/// A sequence of zero or one element produces no pairs. Only the most recent
/// element is retained between steps, which is why elements must be
/// `Clone`: each one appears in two pairs.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::pairwise;
///
/// let pairs: Vec<(char, char)> = pairwise("abcd".chars()).collect();
/// assert_eq!(pairs, vec![('a', 'b'), ('b', 'c'), ('c', 'd')]);
///
/// assert_eq!(pairwise(vec![1]).count(), 0);
/// ```
pub fn pairwise<I>(sequence: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pairwise {
        iterator: sequence.into_iter(),
        previous: None,
        started: false,
    }
}
