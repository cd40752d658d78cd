//! Positional lookup in a sequence.
//!
//! Lookups go through [`Iterator::nth`], which the iterators of list-like
//! collections (slices, `Vec`, `VecDeque`, ranges) override with a direct,
//! bounds-checked index. Those sources are therefore looked up in constant
//! time, while any other sequence is advanced element by element.

use crate::error::SeqError;

/// Returns the element at 0-based `index`, or `None` if the sequence is too
/// short.
///
/// Running off the end is not an error here; see [`nth_or_err`] for the
/// variant that reports it.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::seq::nth;
///
/// let numbers = vec![10, 20, 30];
/// assert_eq!(nth(&numbers, 1), Some(&20));
/// assert_eq!(nth(&numbers, 5), None);
///
/// // Works on any sequence, including infinite ones
/// assert_eq!(nth((0..).map(|x| x * x), 4), Some(16));
/// ```
pub fn nth<I>(sequence: I, index: usize) -> Option<I::Item>
where
    I: IntoIterator,
{
    let element = sequence.into_iter().nth(index);
    if element.is_none() {
        tracing::trace!(index, "nth ran past the end of the sequence");
    }
    element
}

/// Returns the element at 0-based `index`.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfRange`] carrying the actual length of the
/// sequence if it has no element at `index`.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::error::SeqError;
/// use lambars_seq::seq::nth_or_err;
///
/// assert_eq!(nth_or_err("abc".chars(), 2), Ok('c'));
/// assert_eq!(
///     nth_or_err("abc".chars(), 3),
///     Err(SeqError::IndexOutOfRange { index: 3, length: 3 })
/// );
/// ```
pub fn nth_or_err<I>(sequence: I, index: usize) -> Result<I::Item, SeqError>
where
    I: IntoIterator,
{
    let mut length = 0;
    for element in sequence {
        if length == index {
            return Ok(element);
        }
        length += 1;
    }
    tracing::debug!(index, length, "index out of range");
    Err(SeqError::IndexOutOfRange { index, length })
}
