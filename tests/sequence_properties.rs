//! Property-based tests for the sequence operations.
//!
//! Using proptest, we generate random sequences to verify the structural
//! guarantees: shuffling permutes, zipping pads to the longest input,
//! flattening preserves leaf count and order, and the set-style operations
//! respect their membership contracts.

#![cfg(feature = "sequence")]

use proptest::prelude::*;

use funcol::sequence::{Nested, difference, flatten, index_of, intersection, shuffle, uniq, zip};

fn counted<V: PartialEq>(sequence: &[V], target: &V) -> usize {
    sequence.iter().filter(|value| *value == target).count()
}

proptest! {
    /// A shuffle is a permutation: same length, same multiset, input intact.
    #[test]
    fn prop_shuffle_is_a_permutation(sequence in proptest::collection::vec(any::<i32>(), 0..64)) {
        let permuted = shuffle(&sequence);

        prop_assert_eq!(permuted.len(), sequence.len());
        let mut sorted_permuted = permuted;
        sorted_permuted.sort_unstable();
        let mut sorted_original = sequence;
        sorted_original.sort_unstable();
        prop_assert_eq!(sorted_permuted, sorted_original);
    }

    /// Zip produces one row per index of the longest input, each row as wide
    /// as the number of inputs.
    #[test]
    fn prop_zip_row_count_is_the_longest_input(
        sequences in proptest::collection::vec(proptest::collection::vec(any::<i8>(), 0..8), 0..6)
    ) {
        let input_count = sequences.len();
        let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);

        let rows = zip(sequences);

        prop_assert_eq!(rows.len(), longest);
        for row in rows {
            prop_assert_eq!(row.len(), input_count);
        }
    }

    /// Flattening a sequence of leaves is the identity.
    #[test]
    fn prop_flatten_of_flat_input_is_identity(sequence in proptest::collection::vec(any::<i32>(), 0..32)) {
        let leaves: Vec<Nested<i32>> = sequence.iter().copied().map(Nested::Value).collect();
        prop_assert_eq!(flatten(leaves), sequence);
    }

    /// Wrapping runs of a sequence one level deeper never changes the
    /// flattened result.
    #[test]
    fn prop_flatten_ignores_nesting_depth(
        sequence in proptest::collection::vec(any::<i32>(), 0..32),
        pivot in any::<prop::sample::Index>(),
    ) {
        let split = if sequence.is_empty() { 0 } else { pivot.index(sequence.len()) };
        let (head, tail) = sequence.split_at(split);

        let mut tree: Vec<Nested<i32>> = head.iter().copied().map(Nested::Value).collect();
        tree.push(Nested::Sequence(tail.iter().copied().map(Nested::Value).collect()));

        prop_assert_eq!(flatten(tree), sequence);
    }

    /// uniq keeps exactly one occurrence of every input value and is
    /// idempotent.
    #[test]
    fn prop_uniq_keeps_each_value_once(sequence in proptest::collection::vec(0i32..8, 0..32)) {
        let distinct = uniq(sequence.clone());

        for value in &sequence {
            prop_assert_eq!(counted(&distinct, value), 1);
        }
        prop_assert_eq!(uniq(distinct.clone()), distinct);
    }

    /// Every intersection element is present in every input.
    #[test]
    fn prop_intersection_elements_are_in_every_input(
        sequences in proptest::collection::vec(proptest::collection::vec(0i32..8, 0..8), 1..5)
    ) {
        let shared = intersection(&sequences);

        for value in &shared {
            for sequence in &sequences {
                prop_assert!(index_of(sequence, value).is_some());
            }
        }
    }

    /// difference removes exactly the values present in some other input.
    #[test]
    fn prop_difference_respects_membership(
        sequence in proptest::collection::vec(0i32..8, 0..16),
        others in proptest::collection::vec(proptest::collection::vec(0i32..8, 0..8), 0..4),
    ) {
        let survivors = difference(sequence.clone(), &others);

        for value in &survivors {
            prop_assert!(others.iter().all(|other| index_of(other, value).is_none()));
        }
        for value in &sequence {
            let removed = others.iter().any(|other| index_of(other, value).is_some());
            prop_assert_eq!(counted(&survivors, value) == 0, removed);
        }
    }
}
