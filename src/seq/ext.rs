//! Method-call syntax for the sequence functions.

use super::{
    Pairwise, Truncate, Windowed, Zip3, exists2, forall2, iter2, nth, nth_or_err, pairwise,
    truncate, windowed, zip3,
};
use crate::error::SeqError;

/// Extension trait exposing the sequence functions as iterator methods.
///
/// Implemented for every [`Iterator`], so bringing the trait into scope is
/// enough:
///
/// ```rust
/// use lambars_seq::seq::SeqExt;
///
/// let sums: Vec<i32> = (1..=5)
///     .pairwise()
///     .map(|(left, right)| left + right)
///     .collect();
/// assert_eq!(sums, vec![3, 5, 7, 9]);
///
/// let widest = (1..=5).windowed(2)?.max_by_key(|window| window[1] - window[0]);
/// assert_eq!(widest, Some(vec![4, 5]));
/// # Ok::<(), lambars_seq::error::SeqError>(())
/// ```
pub trait SeqExt: Iterator + Sized {
    /// See [`truncate`](super::truncate); yields up to `count + 1` elements.
    fn truncate(self, count: usize) -> Truncate<Self> {
        truncate(self, count)
    }

    /// See [`pairwise`](super::pairwise).
    fn pairwise(self) -> Pairwise<Self>
    where
        Self::Item: Clone,
    {
        pairwise(self)
    }

    /// See [`windowed`](super::windowed).
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if `window_size` is 0.
    fn windowed(self, window_size: usize) -> Result<Windowed<Self>, SeqError>
    where
        Self::Item: Clone,
    {
        windowed(self, window_size)
    }

    /// See [`zip3`](super::zip3).
    fn zip3<B, C>(self, second: B, third: C) -> Zip3<Self, B::IntoIter, C::IntoIter>
    where
        B: IntoIterator,
        C: IntoIterator,
    {
        zip3(self, second, third)
    }

    /// See [`forall2`](super::forall2).
    fn forall2<B, P>(self, second: B, predicate: P) -> bool
    where
        B: IntoIterator,
        P: FnMut(Self::Item, B::Item) -> bool,
    {
        forall2(self, second, predicate)
    }

    /// See [`exists2`](super::exists2).
    fn exists2<B, P>(self, second: B, predicate: P) -> bool
    where
        B: IntoIterator,
        P: FnMut(Self::Item, B::Item) -> bool,
    {
        exists2(self, second, predicate)
    }

    /// See [`iter2`](super::iter2).
    fn iter2<B, F>(self, second: B, action: F)
    where
        B: IntoIterator,
        F: FnMut(Self::Item, B::Item),
    {
        iter2(self, second, action);
    }

    /// See [`nth`](super::nth). Named so it does not shadow [`Iterator::nth`],
    /// which borrows instead of consuming.
    fn nth_or_none(self, index: usize) -> Option<Self::Item> {
        nth(self, index)
    }

    /// See [`nth_or_err`](super::nth_or_err).
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the iterator is too short.
    fn nth_or_err(self, index: usize) -> Result<Self::Item, SeqError> {
        nth_or_err(self, index)
    }
}

impl<I: Iterator> SeqExt for I {}
