//! Control structures for functional programming.
//!
//! - [`Maybe`]: An explicit presence-or-absence value
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::control::Maybe;
//!
//! fn parse_port(text: &str) -> Maybe<u16> {
//!     text.parse().ok().into()
//! }
//!
//! assert_eq!(parse_port("8080"), Maybe::Some(8080));
//! assert_eq!(parse_port("http"), Maybe::None);
//! assert_eq!(parse_port("http").value_or(80), 80);
//! ```

mod maybe;

pub use maybe::Maybe;
