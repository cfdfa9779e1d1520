//! Recursive flattening of nested sequences.
//!
//! Arbitrary nesting is expressed with the [`Nested`] tree: a node is either
//! a leaf value or a sequence of further nodes. The [`nested!`](crate::nested)
//! macro builds such trees with bracket syntax:
//!
//! ```rust
//! use funcol::nested;
//! use funcol::sequence::flatten;
//!
//! let flat = flatten(nested![1, [2, [3, [4]], 5]]);
//! assert_eq!(flat, vec![1, 2, 3, 4, 5]);
//! ```

/// A node in an arbitrarily nested sequence.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::Nested;
///
/// let node = Nested::Sequence(vec![Nested::Value(1), Nested::Value(2)]);
/// assert_eq!(node, Nested::Sequence(vec![Nested::Value(1), Nested::Value(2)]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nested<V> {
    /// A leaf value.
    Value(V),
    /// A nested sequence of further nodes.
    Sequence(Vec<Nested<V>>),
}

/// Flattens a nested sequence into a single flat sequence.
///
/// Every leaf value reachable by descending into nested sequences appears
/// in the result, in depth-first, left-to-right order.
///
/// # Examples
///
/// ```rust
/// use funcol::nested;
/// use funcol::sequence::flatten;
///
/// assert_eq!(flatten(nested![1, [2, [3]]]), vec![1, 2, 3]);
/// ```
pub fn flatten<V>(nested: Vec<Nested<V>>) -> Vec<V> {
    let mut flat = Vec::new();
    for node in nested {
        flatten_into(node, &mut flat);
    }
    flat
}

fn flatten_into<V>(node: Nested<V>, flat: &mut Vec<V>) {
    match node {
        Nested::Value(value) => flat.push(value),
        Nested::Sequence(children) => {
            for child in children {
                flatten_into(child, flat);
            }
        }
    }
}

/// Builds a `Vec<Nested<V>>` with bracket syntax for nesting.
///
/// Plain items become leaf values; bracketed items become nested sequences,
/// to any depth.
///
/// # Examples
///
/// ```rust
/// use funcol::nested;
/// use funcol::sequence::Nested;
///
/// let tree = nested![1, [2, 3]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Value(1),
///         Nested::Sequence(vec![Nested::Value(2), Nested::Value(3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested_node!($item)),*]
    };
}

/// Builds a single [`Nested`](crate::sequence::Nested) node. Implementation
/// detail of [`nested!`](crate::nested).
#[doc(hidden)]
#[macro_export]
macro_rules! nested_node {
    ([$($inner:tt),* $(,)?]) => {
        $crate::sequence::Nested::Sequence(vec![$($crate::nested_node!($inner)),*])
    };
    ($value:expr) => {
        $crate::sequence::Nested::Value($value)
    };
}
