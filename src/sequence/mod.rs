//! Operations over ordered sequences.
//!
//! Everything in this module addresses elements by position:
//!
//! - slicing and positional search: [`first`], [`first_n`], [`last`],
//!   [`last_n`], [`index_of`]
//! - deduplication and set-style operations by strict equality: [`uniq`],
//!   [`uniq_by`], [`intersection`], [`difference`]
//! - positional combination: [`zip`]
//! - recursive flattening of nested sequences: [`Nested`], [`flatten`]
//! - randomized permutation: [`shuffle`], [`shuffle_with`]
//!
//! Equality-based operations require only `PartialEq` and compare values
//! directly; two values are duplicates exactly when they compare equal, not
//! when some coarser rendering of them collides.

mod flatten;
mod set_ops;
mod shuffle;
mod slice;
mod zip;

pub use self::flatten::{Nested, flatten};
pub use self::set_ops::{difference, intersection, uniq, uniq_by};
pub use self::shuffle::{shuffle, shuffle_with};
pub use self::slice::{first, first_n, index_of, last, last_n};
pub use self::zip::zip;
