//! Error types shared by the control and sequence modules.
//!
//! Both error types are small, cloneable values so callers can compare them
//! directly in tests or match on them in their own error enums.

use thiserror::Error;

/// Returned when the payload of an empty [`Maybe`](crate::control::Maybe)
/// is requested.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::control::Maybe;
/// use lambars_seq::error::InvalidOperationError;
///
/// let empty: Maybe<i32> = Maybe::None;
/// assert_eq!(empty.value(), Err(InvalidOperationError { operation: "value" }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Maybe::{operation}: called on a `None` value")]
pub struct InvalidOperationError {
    /// The accessor that was invoked on the empty value.
    pub operation: &'static str,
}

/// Errors raised by the sequence functions.
///
/// Sequence adapters validate their arguments eagerly, so these errors are
/// always returned before any element of the source is pulled.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::error::SeqError;
/// use lambars_seq::seq::nth_or_err;
///
/// let error = nth_or_err(vec![10, 20, 30], 5).unwrap_err();
/// assert_eq!(error, SeqError::IndexOutOfRange { index: 5, length: 3 });
/// assert_eq!(error.to_string(), "index 5 is out of range for a sequence of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// The requested position lies beyond the end of the sequence.
    #[error("index {index} is out of range for a sequence of length {length}")]
    IndexOutOfRange {
        /// The requested 0-based position.
        index: usize,
        /// Number of elements the sequence actually produced.
        length: usize,
    },
}
