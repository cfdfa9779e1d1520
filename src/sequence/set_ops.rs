//! Deduplication and set-style operations by strict equality.
//!
//! All four operations compare values with `PartialEq` directly, so nothing
//! is ever conflated by a lossy rendering of the value. Membership checks
//! are linear scans over [`index_of`], which keeps the bounds minimal; the
//! operations are quadratic in the worst case and intended for the modest
//! sequence sizes a utility toolkit sees.

use super::slice::index_of;

/// Returns the sequence with one occurrence of each distinct value.
///
/// Values are compared by equality and the first occurrence of each is
/// kept, in its original position relative to the other survivors.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::uniq;
///
/// assert_eq!(uniq(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<V: PartialEq>(sequence: Vec<V>) -> Vec<V> {
    let mut distinct = Vec::new();
    for value in sequence {
        if index_of(&distinct, &value).is_none() {
            distinct.push(value);
        }
    }
    distinct
}

/// Returns the sequence deduplicated by a derived key.
///
/// Two elements are duplicates when `key` maps them to equal values; the
/// first element of each group survives.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::uniq_by;
///
/// let one_per_length = uniq_by(vec!["fig", "kiwi", "plum", "pear"], |name| name.len());
/// assert_eq!(one_per_length, vec!["fig", "kiwi"]);
/// ```
pub fn uniq_by<V, S, F>(sequence: Vec<V>, mut key: F) -> Vec<V>
where
    S: PartialEq,
    F: FnMut(&V) -> S,
{
    let mut distinct = Vec::new();
    let mut seen_keys = Vec::new();
    for value in sequence {
        let value_key = key(&value);
        if index_of(&seen_keys, &value_key).is_none() {
            seen_keys.push(value_key);
            distinct.push(value);
        }
    }
    distinct
}

/// Returns the values present in every input sequence, without duplicates.
///
/// Candidates come from the first sequence in order; a value qualifies when
/// each remaining sequence contains an equal value. No inputs yields an
/// empty result.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::intersection;
///
/// let shared = intersection(&[vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
/// assert_eq!(shared, vec![3]);
/// ```
pub fn intersection<V: PartialEq + Clone>(sequences: &[Vec<V>]) -> Vec<V> {
    let Some((candidates, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    let mut shared = Vec::new();
    for value in candidates {
        let already_taken = index_of(&shared, value).is_some();
        if !already_taken && rest.iter().all(|other| index_of(other, value).is_some()) {
            shared.push(value.clone());
        }
    }
    shared
}

/// Returns the elements of `sequence` absent from every other sequence.
///
/// Order and duplicates within `sequence` are preserved for the survivors.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::difference;
///
/// assert_eq!(difference(vec![1, 2, 3, 4], &[vec![2, 4]]), vec![1, 3]);
/// ```
pub fn difference<V: PartialEq>(sequence: Vec<V>, others: &[Vec<V>]) -> Vec<V> {
    sequence
        .into_iter()
        .filter(|value| others.iter().all(|other| index_of(other, value).is_none()))
        .collect()
}
