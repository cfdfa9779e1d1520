//! The `Collection` type and its traversal primitive.
//!
//! This module is the only place in the crate that inspects which collection
//! shape it was handed. [`Collection::each`] and [`Collection::each_ref`]
//! pattern-match on the variant; everything else in the crate is written in
//! terms of those two methods.

use std::collections::HashMap;
use std::hash::Hash;

/// The key under which an element was visited.
///
/// Sequences address elements by position, mappings by name. Iteration
/// callbacks receive the appropriate variant alongside each value.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{Collection, Key};
///
/// let mut visited = Vec::new();
/// Collection::<String, _>::from(vec!["a", "b"]).each(|key, value| {
///     if let Key::Index(index) = key {
///         visited.push((index, value));
///     }
/// });
/// assert_eq!(visited, vec![(0, "a"), (1, "b")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key<K> {
    /// A 0-based position within a sequence.
    Index(usize),
    /// A named key within a mapping.
    Name(K),
}

/// A collection of values: either an ordered sequence or an unordered
/// key-value mapping.
///
/// `Collection` is the union type accepted by every generic operation in
/// this crate. The two shapes differ in how elements are addressed and in
/// what traversal order guarantees:
///
/// - [`Collection::Sequence`] visits indices `0..len` in increasing order,
///   each exactly once
/// - [`Collection::Mapping`] visits every key exactly once, in no particular
///   order, so callers must not rely on mapping traversal order
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use funcol::collection::Collection;
///
/// let sequence = Collection::<String, _>::from(vec![1, 2, 3]);
/// assert_eq!(sequence.len(), 3);
///
/// let mapping = Collection::from(HashMap::from([("a", 1), ("b", 2)]));
/// assert_eq!(mapping.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        deserialize = "K: serde::Deserialize<'de> + Eq + std::hash::Hash, V: serde::Deserialize<'de>"
    ))
)]
pub enum Collection<K, V> {
    /// An ordered, 0-indexed sequence of values.
    Sequence(Vec<V>),
    /// An unordered association of unique keys to values.
    Mapping(HashMap<K, V>),
}

// `PartialEq`/`Eq` are written by hand rather than derived: comparing the
// `Mapping` variant compares `HashMap<K, V>`, whose own `PartialEq`/`Eq`
// impls require `K: Eq + Hash`. A `#[derive]` only emits `K: PartialEq`/
// `K: Eq` bounds and so fails to satisfy `HashMap`. Keeping the bounds here
// (instead of on the enum itself) avoids constraining the unbounded
// `impl<K, V>` blocks and the `Sequence`-only code paths.
impl<K: Eq + Hash, V: PartialEq> PartialEq for Collection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Collection<K, V> {}

impl<K, V> Collection<K, V> {
    /// Invokes `visit(key, value)` once for every element, consuming the
    /// collection.
    ///
    /// This is the traversal primitive every other operation is built on.
    /// Sequences are visited in increasing index order; mappings visit each
    /// key exactly once in unspecified order. The callback is run for its
    /// side effects only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let mut sum = 0;
    /// Collection::<String, _>::from(vec![1, 2, 3]).each(|_, value| sum += value);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn each<F>(self, mut visit: F)
    where
        F: FnMut(Key<K>, V),
    {
        match self {
            Self::Sequence(elements) => {
                for (index, value) in elements.into_iter().enumerate() {
                    visit(Key::Index(index), value);
                }
            }
            Self::Mapping(entries) => {
                for (name, value) in entries {
                    visit(Key::Name(name), value);
                }
            }
        }
    }

    /// Invokes `visit(key, value)` once for every element, by reference.
    ///
    /// The borrowing twin of [`Collection::each`], with the same traversal
    /// guarantees. Used by operations that only need to inspect elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec![1, 2, 3]);
    /// let mut count = 0;
    /// collection.each_ref(|_, _| count += 1);
    /// assert_eq!(count, collection.len());
    /// ```
    pub fn each_ref<F>(&self, mut visit: F)
    where
        F: FnMut(Key<&K>, &V),
    {
        match self {
            Self::Sequence(elements) => {
                for (index, value) in elements.iter().enumerate() {
                    visit(Key::Index(index), value);
                }
            }
            Self::Mapping(entries) => {
                for (name, value) in entries {
                    visit(Key::Name(name), value);
                }
            }
        }
    }

    /// Returns the number of elements in the collection.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns whether the collection contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the collection and returns its values as a sequence.
    ///
    /// Sequence order is preserved; mapping values arrive in traversal
    /// order, which is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let values = Collection::<String, _>::from(vec![1, 2, 3]).into_values();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn into_values(self) -> Vec<V> {
        let mut values = Vec::with_capacity(self.len());
        self.each(|_, value| values.push(value));
        values
    }
}

impl<K, V> From<Vec<V>> for Collection<K, V> {
    fn from(elements: Vec<V>) -> Self {
        Self::Sequence(elements)
    }
}

impl<K, V, const N: usize> From<[V; N]> for Collection<K, V> {
    fn from(elements: [V; N]) -> Self {
        Self::Sequence(elements.into())
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for Collection<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self::Mapping(entries)
    }
}

impl<K, V> FromIterator<V> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Mapping(iter.into_iter().collect())
    }
}
