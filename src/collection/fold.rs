//! Reduction: folding a collection into a single value.
//!
//! Two entry points express the seed-resolution contract:
//!
//! - [`Collection::fold`] takes an explicit seed; every element, including
//!   the first, is combined into the accumulator.
//! - [`Collection::reduce`] takes no seed; the first visited element becomes
//!   the accumulator without passing through the combining function, and an
//!   empty collection yields `None`. There is no sensible identity to
//!   invent, so callers needing a guaranteed result must use `fold`.
//!
//! The searches and quantifiers (`contains`, `every`, `some`) are folds with
//! boolean accumulators. Traversal has no early-exit mechanism, so they run
//! the full collection; their results are fixed from the first deciding
//! element onward.

use super::core::Collection;

impl<K, V> Collection<K, V> {
    /// Folds every element into an accumulator seeded with `init`.
    ///
    /// Elements are combined in traversal order via
    /// `accumulator = combine(accumulator, element)`, starting from the
    /// first element. An empty collection returns `init` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let sum = Collection::<String, _>::from(vec![1, 2, 3]).fold(0, |total, value| total + value);
    /// assert_eq!(sum, 6);
    ///
    /// let empty: Collection<String, i32> = Collection::from(vec![]);
    /// assert_eq!(empty.fold(0, |total, value| total + value), 0);
    /// ```
    pub fn fold<B, F>(self, init: B, combine: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_values().into_iter().fold(init, combine)
    }

    /// Folds every element into an accumulator, by reference.
    ///
    /// The borrowing counterpart of [`Collection::fold`], used by the
    /// predicates and quantifiers that only inspect elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec![1, 2, 3]);
    /// let count = collection.fold_ref(0, |count, _| count + 1);
    /// assert_eq!(count, collection.len());
    /// ```
    pub fn fold_ref<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, &V) -> B,
    {
        let mut accumulator = Some(init);
        self.each_ref(|_, value| {
            // take/restore threads the owned accumulator through the FnMut
            let current = accumulator
                .take()
                .expect("accumulator is restored after every visit");
            accumulator = Some(combine(current, value));
        });
        accumulator.expect("accumulator is restored after every visit")
    }

    /// Folds the collection without an explicit seed.
    ///
    /// The first visited element becomes the initial accumulator and is
    /// never passed through `combine`; folding begins with the second
    /// element. A single-element collection returns its element with
    /// `combine` never invoked. An empty collection returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let product = Collection::<String, _>::from(vec![2, 3, 4]).reduce(|total, value| total * value);
    /// assert_eq!(product, Some(24));
    ///
    /// let empty: Collection<String, i32> = Collection::from(vec![]);
    /// assert_eq!(empty.reduce(|total, value| total + value), None);
    /// ```
    pub fn reduce<F>(self, mut combine: F) -> Option<V>
    where
        F: FnMut(V, V) -> V,
    {
        let mut accumulator = None;
        self.each(|_, value| {
            accumulator = Some(match accumulator.take() {
                None => value,
                Some(current) => combine(current, value),
            });
        });
        accumulator
    }

    /// Folds with a fallible combining function, stopping at the first error.
    ///
    /// Once `combine` returns an error, no further elements are folded and
    /// that first error is returned unmodified. On success the fully folded
    /// accumulator is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec!["3", "not a number", "5"]);
    /// let result: Result<i32, _> = collection.try_fold(0, |total, text| {
    ///     text.parse::<i32>().map(|value| total + value)
    /// });
    /// assert!(result.is_err());
    /// ```
    pub fn try_fold<B, E, F>(self, init: B, mut combine: F) -> Result<B, E>
    where
        F: FnMut(B, V) -> Result<B, E>,
    {
        self.fold(Ok(init), |accumulator, value| {
            accumulator.and_then(|current| combine(current, value))
        })
    }
}

impl<K, V: PartialEq> Collection<K, V> {
    /// Returns whether some element strict-equals `target`.
    ///
    /// A fold with a boolean accumulator: once a match is seen, further
    /// visits cannot change the answer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec![1, 2, 3]);
    /// assert!(collection.contains(&2));
    /// assert!(!collection.contains(&7));
    /// ```
    pub fn contains(&self, target: &V) -> bool {
        self.fold_ref(false, |found, value| found || value == target)
    }
}

impl<K, V> Collection<K, V> {
    /// Returns whether `predicate` holds for every element.
    ///
    /// Vacuously true for an empty collection. A fold seeded `true`,
    /// combining with logical AND.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec![2, 4, 6]);
    /// assert!(collection.every(|value| value % 2 == 0));
    /// assert!(!collection.every(|value| *value > 2));
    ///
    /// let empty: Collection<String, i32> = Collection::from(vec![]);
    /// assert!(empty.every(|_| false));
    /// ```
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.fold_ref(true, |all_so_far, value| all_so_far && predicate(value))
    }

    /// Returns whether `predicate` holds for at least one element.
    ///
    /// Vacuously false for an empty collection. A fold seeded `false`,
    /// combining with logical OR.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec![1, 2, 3]);
    /// assert!(collection.some(|value| *value > 2));
    /// assert!(!collection.some(|value| *value > 10));
    /// ```
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.fold_ref(false, |any_so_far, value| any_so_far || predicate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn sequence(elements: Vec<i32>) -> Collection<String, i32> {
        Collection::from(elements)
    }

    // =========================================================================
    // Seed resolution tests
    // =========================================================================

    #[rstest]
    fn fold_with_seed_visits_every_element() {
        assert_eq!(sequence(vec![1, 2, 3]).fold(10, |total, value| total + value), 16);
    }

    #[rstest]
    fn fold_on_empty_collection_returns_the_seed() {
        assert_eq!(sequence(vec![]).fold(0, |total, value| total + value), 0);
    }

    #[rstest]
    fn reduce_on_singleton_returns_the_element_without_combining() {
        let mut invocations = 0;
        let result = sequence(vec![5]).reduce(|total, value| {
            invocations += 1;
            total + value * value
        });

        assert_eq!(result, Some(5));
        assert_eq!(invocations, 0);
    }

    #[rstest]
    fn reduce_on_empty_collection_returns_none() {
        assert_eq!(sequence(vec![]).reduce(|total, value| total + value), None);
    }

    #[rstest]
    fn reduce_begins_combining_at_the_second_element() {
        let mut invocations = 0;
        let result = sequence(vec![1, 2, 3]).reduce(|total, value| {
            invocations += 1;
            total + value
        });

        assert_eq!(result, Some(6));
        assert_eq!(invocations, 2);
    }

    #[rstest]
    fn fold_works_over_mappings() {
        let collection = Collection::from(HashMap::from([("a", 1), ("b", 2), ("c", 3)]));
        assert_eq!(collection.fold(0, |total, value| total + value), 6);
    }

    // =========================================================================
    // try_fold tests
    // =========================================================================

    #[rstest]
    fn try_fold_returns_the_folded_accumulator_on_success() {
        let result: Result<i32, String> =
            sequence(vec![1, 2, 3]).try_fold(0, |total, value| Ok(total + value));
        assert_eq!(result, Ok(6));
    }

    #[rstest]
    fn try_fold_propagates_the_first_error_and_stops_combining() {
        let mut combined = Vec::new();
        let result: Result<i32, String> = sequence(vec![1, -2, 3]).try_fold(0, |total, value| {
            combined.push(value);
            if value < 0 {
                Err(format!("negative element {value}"))
            } else {
                Ok(total + value)
            }
        });

        assert_eq!(result, Err(String::from("negative element -2")));
        // The element after the failure is never handed to the closure.
        assert_eq!(combined, vec![1, -2]);
    }

    // =========================================================================
    // contains tests
    // =========================================================================

    #[rstest]
    #[case(2, true)]
    #[case(4, false)]
    fn contains_uses_strict_equality(#[case] target: i32, #[case] expected: bool) {
        assert_eq!(sequence(vec![1, 2, 3]).contains(&target), expected);
    }

    #[rstest]
    fn contains_searches_mapping_values() {
        let collection = Collection::from(HashMap::from([("a", 1), ("b", 2)]));
        assert!(collection.contains(&2));
        assert!(!collection.contains(&9));
    }

    // =========================================================================
    // Quantifier tests
    // =========================================================================

    #[rstest]
    fn every_is_vacuously_true_on_empty() {
        assert!(sequence(vec![]).every(|_| false));
    }

    #[rstest]
    fn some_is_vacuously_false_on_empty() {
        assert!(!sequence(vec![]).some(|_| true));
    }

    #[rstest]
    #[case(vec![2, 4, 6], true)]
    #[case(vec![2, 3, 6], false)]
    fn every_requires_all_elements_to_pass(#[case] elements: Vec<i32>, #[case] expected: bool) {
        assert_eq!(sequence(elements).every(|value| value % 2 == 0), expected);
    }

    #[rstest]
    #[case(vec![1, 3, 4], true)]
    #[case(vec![1, 3, 5], false)]
    fn some_requires_one_element_to_pass(#[case] elements: Vec<i32>, #[case] expected: bool) {
        assert_eq!(sequence(elements).some(|value| value % 2 == 0), expected);
    }

    #[rstest]
    fn quantifiers_over_boolean_elements_test_the_elements_themselves() {
        let collection: Collection<String, bool> = Collection::from(vec![true, true, false]);
        assert!(!collection.every(|value| *value));
        assert!(collection.some(|value| *value));
    }
}
