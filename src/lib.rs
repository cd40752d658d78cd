//! # lambars-seq
//!
//! Lazy sequence combinators and an explicit absence-of-value type for
//! Rust iterators.
//!
//! ## Overview
//!
//! The standard library already covers `map`, `filter`, `fold` and `zip`.
//! This crate adds the pieces of F#'s `Seq` module that it lacks:
//!
//! - **Control**: [`Maybe`](control::Maybe), a `None`/`Some` value with
//!   structural equality and an erroring accessor
//! - **Sequences**: `unfold`, `initialize_infinite`, `truncate`, `pairwise`,
//!   `windowed`, `zip3`, lockstep `forall2`/`exists2`/`iter2`, and a
//!   non-panicking `nth`
//!
//! ## Feature Flags
//!
//! - `control`: The `Maybe` type
//! - `seq`: Sequence generators and consumers
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_seq::prelude::*;
//!
//! let step = |(n, total): (u32, u32)| Some((total + n, (n + 1, total + n)));
//! let triangular: Vec<u32> = unfold(step, (1, 0)).truncate(4).collect();
//! assert_eq!(triangular, vec![1, 3, 6, 10, 15]);
//!
//! let third = Maybe::from(nth(&triangular, 2).copied());
//! assert_eq!(third, Maybe::Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lambars_seq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;
}

pub mod error;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "seq")]
pub mod seq;
