//! Positional access and search.

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<V>(sequence: &[V]) -> Option<&V> {
    sequence.first()
}

/// Returns the first `count` elements in order, clamped to the length.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<V>(sequence: &[V], count: usize) -> &[V] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub fn last<V>(sequence: &[V]) -> Option<&V> {
    sequence.last()
}

/// Returns the last `count` elements in order, clamped to the length.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<V>(sequence: &[V], count: usize) -> &[V] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Returns the lowest index whose element equals `target`.
///
/// Later duplicates never change the answer; `None` means the value is
/// absent.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20], &30), None);
/// ```
pub fn index_of<V: PartialEq>(sequence: &[V], target: &V) -> Option<usize> {
    sequence.iter().position(|value| value == target)
}
