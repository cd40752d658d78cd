//! Maybe type - an explicit presence or absence of a value.
//!
//! This module provides the `Maybe<T>` type, which is either `None` (no
//! payload) or `Some(T)` (exactly one payload). Unlike a nullable reference,
//! absence is part of the type, so callers have to handle it before they can
//! reach the value.
//!
//! `Maybe<T>` converts losslessly to and from [`Option<T>`], so it can be
//! used at API boundaries where an explicit, self-describing absence type is
//! preferred while the rest of the code keeps using the standard library.
//!
//! # Examples
//!
//! ```rust
//! use lambars_seq::control::Maybe;
//!
//! let present = Maybe::some(42);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! assert!(present.is_some());
//! assert!(absent.is_none());
//!
//! // Equality is structural
//! assert_eq!(present, Maybe::Some(42));
//! assert_ne!(present, absent);
//!
//! // Accessing the payload of `None` is an error, not a default value
//! assert_eq!(present.value(), Ok(&42));
//! assert!(absent.value().is_err());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::InvalidOperationError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Equality and Hashing
///
/// - `None == None`
/// - `Some(a) == Some(b)` if and only if `a == b`
/// - `Some(_) != None`
///
/// Hashing agrees with equality: `None` always hashes as the word `0`, and
/// `Some(value)` hashes exactly like `value` itself.
///
/// # Examples
///
/// ```rust
/// use lambars_seq::control::Maybe;
///
/// let name: Maybe<String> = Maybe::Some("lambars".to_string());
/// let length = name.map(|text| text.len());
/// assert_eq!(length, Maybe::Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    None,
    /// Exactly one value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the empty value.
    ///
    /// Every call produces an independent `None`; there is no shared
    /// instance behind it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// let empty: Maybe<u8> = Maybe::none();
    /// assert_eq!(empty, Maybe::None);
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps `value` in a populated `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(5), Maybe::Some(5));
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert!(Maybe::some(1).is_some());
    /// assert!(!Maybe::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_none());
    /// assert!(!Maybe::some(1).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Returns a reference to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperationError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).value(), Ok(&3));
    /// assert!(Maybe::<i32>::None.value().is_err());
    /// ```
    #[inline]
    pub const fn value(&self) -> Result<&T, InvalidOperationError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(InvalidOperationError { operation: "value" }),
        }
    }

    /// Returns the payload, consuming the `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperationError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::some("text".to_string()).into_value(), Ok("text".to_string()));
    /// ```
    #[inline]
    pub fn into_value(self) -> Result<T, InvalidOperationError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(InvalidOperationError {
                operation: "into_value",
            }),
        }
    }

    /// Returns the payload, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`. Use [`Maybe::into_value`] to get an error
    /// instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(7).unwrap(), 7);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Returns the payload, or `default` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).value_or(9), 1);
    /// assert_eq!(Maybe::None.value_or(9), 9);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the payload, or computes one with `function` if this is `None`.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::Some(42));
    /// assert_eq!(Maybe::<i32>::None.map(|x| x * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::None };
    /// assert_eq!(Maybe::some(8).bind(halve), Maybe::Some(4));
    /// assert_eq!(Maybe::some(7).bind(halve), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the payload only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns `self` if it holds a value, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative,
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|| "nothing".to_string(), |x| x.to_string());
    /// assert_eq!(describe(Maybe::Some(3)), "3");
    /// assert_eq!(describe(Maybe::None), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, N, S>(self, none_function: N, some_function: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard library [`Option`].
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns an iterator over the payload (zero or one element).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().to_option().into_iter()
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the payload, or `T::default()` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_seq::control::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::None.value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::None => state.write_usize(0),
            Self::Some(value) => value.hash(state),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Some(value) => write!(formatter, "Some({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(x)` becomes `Maybe::Some(x)` and `None` becomes `Maybe::None`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

// =============================================================================
// Iterator Support
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Some(value) => serializer.serialize_some(value),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
