//! Sequence generation from a seed and a step function.
//!
//! [`unfold`] is the dual of a fold: instead of collapsing a sequence into a
//! single value, it grows a sequence out of a single state. The step function
//! receives the current state and either returns the next element together
//! with the following state, or `None` to end the sequence.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::seq::unfold;
//!
//! // Fibonacci numbers, carried as a pair of consecutive terms
//! let fibonacci = unfold(
//!     |(current, next): (u64, u64)| Some((current, (next, current + next))),
//!     (1, 1),
//! );
//! let first: Vec<u64> = fibonacci.take(8).collect();
//! assert_eq!(first, vec![1, 1, 2, 3, 5, 8, 13, 21]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// Lazy sequence produced by [`unfold`].
///
/// The state is moved into the generator on every step and replaced by the
/// state it returns. Once the generator signals stop, the state is gone and
/// every later call to `next` returns `None` without invoking the generator
/// again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Unfold<S, F> {
    state: Option<S>,
    generator: F,
}

impl<S: fmt::Debug, F> fmt::Debug for Unfold<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unfold")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T, S, F> Iterator for Unfold<S, F>
where
    F: FnMut(S) -> Option<(T, S)>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.take()?;
        match (self.generator)(state) {
            Some((value, next_state)) => {
                self.state = Some(next_state);
                Some(value)
            }
            None => {
                tracing::trace!("unfold generator signalled end of sequence");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_some() {
            (0, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T, S, F> FusedIterator for Unfold<S, F> where F: FnMut(S) -> Option<(T, S)> {}

/// Creates a lazy, potentially infinite sequence from `generator` and `seed`.
///
/// On each demand the generator is called with the current state:
///
/// - `Some((value, next_state))` emits `value` and keeps `next_state` for
///   the following demand
/// - `None` ends the sequence
///
/// Nothing runs until the first element is requested, and every call to
/// `unfold` owns an independent state. If the generator never returns
/// `None` the sequence is infinite, so bound it with
/// [`truncate`](super::truncate) or [`Iterator::take`].
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::unfold;
///
/// let generator = |state: i32| if state > 10 { None } else { Some((state, state + 1)) };
/// let counted: Vec<i32> = unfold(generator, 1).collect();
/// assert_eq!(counted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn unfold<T, S, F>(generator: F, seed: S) -> Unfold<S, F>
where
    F: FnMut(S) -> Option<(T, S)>,
{
    Unfold {
        state: Some(seed),
        generator,
    }
}

/// Creates the infinite sequence `function(0), function(1), function(2), ...`.
///
/// This is [`unfold`] over a `usize` counter starting at 0. The counter cannot
/// advance past `usize::MAX`, so the sequence technically ends after
/// `usize::MAX` elements.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::initialize_infinite;
///
/// let squares: Vec<usize> = initialize_infinite(|index| index * index).take(5).collect();
/// assert_eq!(squares, vec![0, 1, 4, 9, 16]);
/// ```
pub fn initialize_infinite<T, F>(mut function: F) -> impl FusedIterator<Item = T>
where
    F: FnMut(usize) -> T,
{
    unfold(
        move |index: usize| {
            index
                .checked_add(1)
                .map(|next_index| (function(index), next_index))
        },
        0,
    )
}

static_assertions::assert_impl_all!(Unfold<u32, fn(u32) -> Option<(u32, u32)>>: Send, Sync, Clone);
