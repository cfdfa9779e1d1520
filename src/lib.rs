//! # funcol
//!
//! A functional collections toolkit providing generic iteration,
//! transformation, reduction, and function-decoration primitives.
//!
//! ## Overview
//!
//! This library offers a minimal, composable set of building blocks for
//! working with two kinds of collections, ordered sequences and unordered
//! key-value mappings, together with decorators that alter how a function
//! behaves over time. It includes:
//!
//! - **Collections**: a tagged [`Collection`](collection::Collection) union
//!   of sequences and mappings, with a single traversal primitive that all
//!   higher-order operations are built from
//! - **Reduction**: explicit-seed and first-element-seeded folds, plus the
//!   quantifiers and searches derived from them
//! - **Sequence operations**: slicing, deduplication, zipping, recursive
//!   flattening, set-style intersection and difference, and shuffling
//! - **Function decorators**: single-invocation memo, argument-keyed memo,
//!   rate-limited invocation, and deferred invocation
//! - **Combinators**: identity, constant, and flip
//!
//! ## Feature Flags
//!
//! - `collection`: the `Collection` type and its operations
//! - `sequence`: sequence-only operations (pulls in `rand` for shuffling)
//! - `decorate`: synchronous function decorators
//! - `async`: deferred invocation via the tokio runtime
//! - `serde`: `Serialize`/`Deserialize` for the public data types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcol::prelude::*;
//!
//! let doubled = Collection::<String, _>::from(vec![1, 2, 3]).map(|_, value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funcol::prelude::*;
/// ```
pub mod prelude {

    pub use crate::combinator::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "decorate")]
    pub use crate::decorate::*;
}

pub mod combinator;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "decorate")]
pub mod decorate;
