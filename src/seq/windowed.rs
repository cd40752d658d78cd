//! Sliding windows over a sequence.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::SeqError;

/// Lazy sequence of windows produced by [`windowed`].
///
/// The last `window_size` elements live in a ring buffer; every emitted
/// window is a fresh `Vec` copied out of it.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Windowed<I: Iterator> {
    iterator: I,
    buffer: VecDeque<I::Item>,
    window_size: usize,
    finished: bool,
}

impl<I: Iterator> Windowed<I> {
    /// The number of elements in every emitted window.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let Some(element) = self.iterator.next() else {
                self.finished = true;
                self.buffer.clear();
                return None;
            };
            if self.buffer.len() == self.window_size {
                self.buffer.pop_front();
            }
            self.buffer.push_back(element);
            if self.buffer.len() == self.window_size {
                return Some(self.buffer.iter().cloned().collect());
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let (lower, upper) = self.iterator.size_hint();
        // Elements still needed before the first window can be emitted.
        let missing = self.window_size - self.buffer.len().min(self.window_size - 1) - 1;
        (
            lower.saturating_sub(missing),
            upper.map(|upper| upper.saturating_sub(missing)),
        )
    }
}

impl<I> FusedIterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Yields every contiguous window of `window_size` elements, sliding by one.
///
/// The first window holds elements `[0, window_size)`, the next
/// `[1, window_size + 1)`, and so on. A sequence shorter than `window_size`
/// yields nothing. Each window is an independent `Vec`, so mutating one
/// never affects another.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] if `window_size` is 0. The check
/// happens eagerly, before any element of `sequence` is pulled.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::windowed;
///
/// let windows: Vec<Vec<i32>> = windowed(vec![1, 2, 3, 4], 3)?.collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
///
/// assert!(windowed(vec![1, 2, 3], 0).is_err());
/// # Ok::<(), lambars_seq::error::SeqError>(())
/// ```
pub fn windowed<I>(sequence: I, window_size: usize) -> Result<Windowed<I::IntoIter>, SeqError>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if window_size == 0 {
        tracing::debug!(window_size, "rejecting empty window size");
        return Err(SeqError::InvalidArgument {
            parameter: "window_size",
            reason: "must be at least 1",
        });
    }
    Ok(Windowed {
        iterator: sequence.into_iter(),
        buffer: VecDeque::with_capacity(window_size),
        window_size,
        finished: false,
    })
}
