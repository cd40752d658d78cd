//! Lazy sequence generators and consumers in the style of F#'s `Seq` module.
//!
//! Every function accepts anything implementing [`IntoIterator`] and, where
//! it returns a sequence, returns a lazy iterator: nothing is pulled from the
//! source until the result is consumed, and dropping the result part-way
//! through releases the source and any buffered elements.
//!
//! - Generators: [`unfold`], [`initialize_infinite`], [`singleton`]
//! - Consumers: [`truncate`], [`pairwise`], [`windowed`], [`collect`]
//! - Lockstep traversal: [`zip`], [`zip3`], [`forall2`], [`exists2`], [`iter2`]
//! - Queries: [`nth`], [`nth_or_err`], [`forall`], [`exists`], [`iter`]
//!
//! The same operations are available as methods through [`SeqExt`].
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::seq::{SeqExt, unfold};
//!
//! // Collatz sequence of 6, ending once it reaches 1
//! let collatz: Vec<u64> = unfold(
//!     |state: u64| match state {
//!         0 => None,
//!         1 => Some((1, 0)),
//!         even if even % 2 == 0 => Some((even, even / 2)),
//!         odd => Some((odd, 3 * odd + 1)),
//!     },
//!     6,
//! )
//! .collect();
//! assert_eq!(collatz, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
//!
//! let steps_down = collatz.iter().pairwise().filter(|(left, right)| right < left).count();
//! assert_eq!(steps_down, 6);
//! ```

mod ext;
mod lockstep;
mod nth;
mod pairwise;
mod traverse;
mod truncate;
mod unfold;
mod windowed;

pub use ext::SeqExt;
pub use lockstep::{Zip3, exists2, forall2, iter2, zip, zip3};
pub use nth::{nth, nth_or_err};
pub use pairwise::{Pairwise, pairwise};
pub use traverse::{collect, exists, forall, iter, singleton};
pub use truncate::{Truncate, truncate};
pub use unfold::{Unfold, initialize_infinite, unfold};
pub use windowed::{Windowed, windowed};
