//! A function that runs at most one time.

use std::marker::PhantomData;
use std::mem;

/// The internal state of a [`Once`] decorator.
///
/// Tracks whether the wrapped function is still waiting to run, has
/// produced its result, or panicked while running.
enum OnceState<R, F> {
    /// The function has not been invoked yet.
    Pending(F),
    /// The function has run; its result is replayed on every call.
    Done(R),
    /// The function panicked on its first invocation.
    Poisoned,
}

/// A decorator that invokes its function on the first call only.
///
/// The first `call` runs the wrapped function with that call's argument and
/// caches the result; every later `call` returns the cached result and
/// ignores its argument entirely. The wrapped function is consumed by the
/// first invocation, so `FnOnce` closures are accepted.
///
/// # Panics
///
/// If the wrapped function panics, the decorator becomes poisoned and every
/// later `call` panics: a half-finished first invocation has no result that
/// could honestly be replayed.
///
/// # Examples
///
/// ```rust
/// use funcol::decorate::Once;
///
/// let mut expensive = Once::new(|input: i32| input * 100);
///
/// assert_eq!(expensive.call(3), 300);
/// assert_eq!(expensive.call(999), 300); // argument ignored, result replayed
/// assert!(expensive.has_run());
/// ```
pub struct Once<A, R, F> {
    state: OnceState<R, F>,
    _argument: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Creates a decorator around the given function.
    ///
    /// The function is not invoked until the first [`Once::call`].
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: OnceState::Pending(function),
            _argument: PhantomData,
        }
    }

    /// Invokes the wrapped function on the first call; replays its result
    /// on every later call.
    ///
    /// # Panics
    ///
    /// Panics if a previous invocation of the wrapped function panicked.
    pub fn call(&mut self, argument: A) -> R {
        // Pending is swapped out before the function runs, so a panic
        // inside it leaves the decorator poisoned rather than re-runnable.
        match mem::replace(&mut self.state, OnceState::Poisoned) {
            OnceState::Pending(function) => {
                let result = function(argument);
                self.state = OnceState::Done(result.clone());
                result
            }
            OnceState::Done(result) => {
                let replayed = result.clone();
                self.state = OnceState::Done(result);
                replayed
            }
            OnceState::Poisoned => panic!("Once decorator has been poisoned"),
        }
    }

    /// Returns whether the wrapped function has already run.
    pub const fn has_run(&self) -> bool {
        matches!(self.state, OnceState::Done(_))
    }

    /// Returns whether the wrapped function panicked on its invocation.
    pub const fn is_poisoned(&self) -> bool {
        matches!(self.state, OnceState::Poisoned)
    }
}
