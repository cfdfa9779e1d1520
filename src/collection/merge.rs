//! Merging key-value mappings.
//!
//! Both operations take the target by value and hand it back merged, with
//! sources applied in argument order. They differ only in who wins when a
//! key is seen twice: [`extend`] lets the latest writer win, [`defaults`]
//! the earliest.

use std::collections::HashMap;
use std::hash::Hash;

/// Copies every entry of every source into `target`, last writer wins.
///
/// Sources are applied in order; a key present in several sources ends up
/// with the value from the latest one, and keys already present in `target`
/// are overwritten.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use funcol::collection::extend;
///
/// let merged = extend(
///     HashMap::from([("a", 1)]),
///     [HashMap::from([("b", 2)]), HashMap::from([("a", 3)])],
/// );
/// assert_eq!(merged, HashMap::from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<K, V, S>(mut target: HashMap<K, V>, sources: S) -> HashMap<K, V>
where
    K: Eq + Hash,
    S: IntoIterator<Item = HashMap<K, V>>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
    target
}

/// Copies source entries into `target` without overwriting, first writer wins.
///
/// A key already present in `target`, including one written by an earlier
/// source during this same call, keeps its value.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use funcol::collection::defaults;
///
/// let merged = defaults(
///     HashMap::from([("a", 1)]),
///     [HashMap::from([("a", 9), ("b", 2)])],
/// );
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<K, V, S>(mut target: HashMap<K, V>, sources: S) -> HashMap<K, V>
where
    K: Eq + Hash,
    S: IntoIterator<Item = HashMap<K, V>>,
{
    for source in sources {
        for (key, value) in source {
            target.entry(key).or_insert(value);
        }
    }
    target
}
