//! A function cached per distinct argument.

use std::collections::HashMap;
use std::hash::Hash;

/// A decorator that invokes its function once per distinct argument.
///
/// Results are cached under the argument value itself: a `call` with an
/// argument equal to one seen before returns the cached result without
/// invoking the wrapped function. Arguments double as cache keys and so
/// must be hashable and comparable by value; a multi-argument function is
/// wrapped by passing its argument list as a tuple.
///
/// # Examples
///
/// ```rust
/// use funcol::decorate::Memoize;
///
/// let mut fibonacci_step = Memoize::new(|(previous, current): (u64, u64)| previous + current);
///
/// assert_eq!(fibonacci_step.call((1, 2)), 3);
/// assert_eq!(fibonacci_step.call((1, 2)), 3); // cached, not recomputed
/// assert_eq!(fibonacci_step.call((2, 3)), 5); // a new argument recomputes
/// ```
pub struct Memoize<A, R, F> {
    function: F,
    cache: HashMap<A, R>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Creates a decorator with an empty cache around the given function.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: HashMap::new(),
        }
    }

    /// Returns the cached result for `argument`, invoking the wrapped
    /// function and caching on a miss.
    pub fn call(&mut self, argument: A) -> R {
        let function = &mut self.function;
        self.cache
            .entry(argument.clone())
            .or_insert_with(|| function(argument))
            .clone()
    }

    /// Returns whether a result is already cached for `argument`.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.contains_key(argument)
    }

    /// Returns the number of distinct arguments cached so far.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
