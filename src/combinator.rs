//! Fundamental combinators used throughout the toolkit.
//!
//! - [`identity`]: returns its input unchanged (the I combinator)
//! - [`constant`]: creates a function that always returns the same value
//!   (the K combinator)
//! - [`flip`]: swaps the arguments of a binary function (the C combinator)
//!
//! [`identity`] is the default transform everywhere an operation accepts an
//! optional one: mapping with it reproduces the input, and quantifying with
//! it over boolean elements tests the elements themselves.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition and the
/// default iterator for operations that transform elements.
///
/// # Examples
///
/// ```
/// use funcol::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # As a default transform
///
/// ```
/// use funcol::combinator::identity;
/// use funcol::collection::Collection;
///
/// let unchanged = Collection::<String, _>::from(vec![1, 2, 3]).map(|_, value| identity(value));
/// assert_eq!(unchanged, vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Useful when an operation expects a per-element function but the caller
/// wants the same result for every element.
///
/// # Examples
///
/// ```
/// use funcol::combinator::constant;
///
/// let always_zero = constant::<_, i32>(0);
/// assert_eq!(always_zero(100), 0);
/// assert_eq!(always_zero(-5), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) == f(a, b)`. Handy for
/// folding with a combining function whose argument order does not match the
/// accumulator-first convention.
///
/// # Examples
///
/// ```
/// use funcol::combinator::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
