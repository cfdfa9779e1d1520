//! Transformations: producing new sequences from a collection.
//!
//! Every operation here consumes a [`Collection`] and produces a `Vec` in
//! traversal order, built on the iteration primitive. `reject` is defined by
//! inverting the predicate and delegating to `filter` rather than by
//! traversing again.

use std::collections::HashMap;
use std::hash::Hash;

use super::core::{Collection, Key};

impl<K, V> Collection<K, V> {
    /// Transforms every element, producing results in traversal order.
    ///
    /// The callback receives the element's key alongside its value; the
    /// result has one entry per visited element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let doubled = Collection::<String, _>::from(vec![1, 2, 3]).map(|_, value| value * 2);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn map<B, F>(self, mut transform: F) -> Vec<B>
    where
        F: FnMut(Key<K>, V) -> B,
    {
        let mut results = Vec::with_capacity(self.len());
        self.each(|key, value| results.push(transform(key, value)));
        results
    }

    /// Transforms every element with a fallible callback.
    ///
    /// Either completes in full or returns the first error unmodified; once
    /// an element fails, no further elements are transformed.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let parsed: Result<Vec<i32>, _> = Collection::<String, _>::from(vec!["1", "2"])
    ///     .try_map(|_, text| text.parse());
    /// assert_eq!(parsed.unwrap(), vec![1, 2]);
    /// ```
    pub fn try_map<B, E, F>(self, mut transform: F) -> Result<Vec<B>, E>
    where
        F: FnMut(Key<K>, V) -> Result<B, E>,
    {
        let mut outcome: Result<Vec<B>, E> = Ok(Vec::with_capacity(self.len()));
        self.each(|key, value| {
            if let Ok(results) = &mut outcome {
                match transform(key, value) {
                    Ok(result) => results.push(result),
                    Err(error) => outcome = Err(error),
                }
            }
        });
        outcome
    }

    /// Keeps the elements for which `test` returns true, in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let even = Collection::<String, _>::from(vec![1, 2, 3, 4]).filter(|value| value % 2 == 0);
    /// assert_eq!(even, vec![2, 4]);
    /// ```
    pub fn filter<P>(self, mut test: P) -> Vec<V>
    where
        P: FnMut(&V) -> bool,
    {
        let mut passing = Vec::new();
        self.each(|_, value| {
            if test(&value) {
                passing.push(value);
            }
        });
        passing
    }

    /// Keeps the elements for which `test` returns false.
    ///
    /// The logical complement of [`Collection::filter`], expressed by
    /// inverting the predicate and delegating to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let odd = Collection::<String, _>::from(vec![1, 2, 3, 4]).reject(|value| value % 2 == 0);
    /// assert_eq!(odd, vec![1, 3]);
    /// ```
    pub fn reject<P>(self, mut test: P) -> Vec<V>
    where
        P: FnMut(&V) -> bool,
    {
        self.filter(move |value| !test(value))
    }

    /// Calls a method with each element as receiver, collecting the results.
    ///
    /// The element is handed to `method` as a mutable receiver, so methods
    /// that modify their receiver behave as they would on a direct call.
    /// Extra arguments are closure captures. Results arrive in traversal
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec![vec![3, 1], vec![2, 0]]);
    /// let sorted = collection.invoke(|element| {
    ///     element.sort_unstable();
    ///     element.clone()
    /// });
    /// assert_eq!(sorted, vec![vec![1, 3], vec![0, 2]]);
    /// ```
    pub fn invoke<R, M>(self, mut method: M) -> Vec<R>
    where
        M: FnMut(&mut V) -> R,
    {
        self.map(|_, mut element| method(&mut element))
    }

    /// Returns the elements ordered by ascending sort key.
    ///
    /// The sort is stable: elements with equal keys keep their traversal
    /// order. Sorting by a named field is spelled as a field-accessor
    /// closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::<String, _>::from(vec!["pear", "fig", "apple"]);
    /// let by_length = collection.sort_by(|name| name.len());
    /// assert_eq!(by_length, vec!["fig", "pear", "apple"]);
    /// ```
    pub fn sort_by<S, F>(self, key: F) -> Vec<V>
    where
        S: Ord,
        F: FnMut(&V) -> S,
    {
        let mut elements = self.into_values();
        elements.sort_by_key(key);
        elements
    }
}

impl<K, K2: Eq + Hash, V2> Collection<K, HashMap<K2, V2>> {
    /// Extracts the entry named `key` from each element.
    ///
    /// A convenience over [`Collection::map`] for collections whose elements
    /// are themselves mappings; elements missing the key yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use funcol::collection::Collection;
    ///
    /// let people = Collection::<String, _>::from(vec![
    ///     HashMap::from([("name", "ada"), ("role", "engineer")]),
    ///     HashMap::from([("name", "grace")]),
    /// ]);
    /// assert_eq!(people.pluck(&"name"), vec![Some("ada"), Some("grace")]);
    /// ```
    pub fn pluck(self, key: &K2) -> Vec<Option<V2>> {
        self.map(|_, mut element| element.remove(key))
    }
}
