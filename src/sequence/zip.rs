//! Positional combination of several sequences.

/// Combines sequences positionally into rows of equal index.
///
/// Row `i` holds the `i`-th element of every input in input order, with
/// `None` standing in for inputs shorter than the longest. The result has
/// one row per index of the longest input.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::zip;
///
/// let rows = zip(vec![vec!["a", "b", "c"], vec!["1", "2"]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some("a"), Some("1")],
///         vec![Some("b"), Some("2")],
///         vec![Some("c"), None],
///     ]
/// );
/// ```
pub fn zip<V>(sequences: Vec<Vec<V>>) -> Vec<Vec<Option<V>>> {
    let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);
    let mut columns: Vec<_> = sequences.into_iter().map(Vec::into_iter).collect();

    (0..longest)
        .map(|_| columns.iter_mut().map(Iterator::next).collect())
        .collect()
}
