//! A function invoked at most once per time window.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// A decorator that rate-limits invocations of its function.
///
/// The wrapped function runs at most once per window. The policy is
/// leading-edge: a `call` arriving once the window has elapsed (or before
/// any invocation at all) invokes the function immediately and opens a new
/// window; a `call` arriving inside an open window does not invoke the
/// function and returns the most recent result instead. Nothing is replayed
/// when the window closes; a suppressed call is simply absorbed.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use funcol::decorate::Throttle;
///
/// let mut throttled = Throttle::new(|value: i32| value * 10, Duration::from_secs(3600));
///
/// assert_eq!(throttled.call(1), 10);
/// // Inside the window: the function does not run again.
/// assert_eq!(throttled.call(2), 10);
/// ```
pub struct Throttle<A, R, F> {
    function: F,
    window: Duration,
    last: Option<(Instant, R)>,
    _argument: PhantomData<fn(A)>,
}

impl<A, R, F> Throttle<A, R, F>
where
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Creates a decorator that invokes `function` at most once per
    /// `window`.
    #[inline]
    pub fn new(function: F, window: Duration) -> Self {
        Self {
            function,
            window,
            last: None,
            _argument: PhantomData,
        }
    }

    /// Invokes the wrapped function if the window has elapsed; otherwise
    /// returns the most recent result without invoking it.
    pub fn call(&mut self, argument: A) -> R {
        let now = Instant::now();
        if let Some((last_invocation, result)) = &self.last {
            if now.duration_since(*last_invocation) < self.window {
                return result.clone();
            }
        }

        let result = (self.function)(argument);
        self.last = Some((now, result.clone()));
        result
    }

    /// Returns whether the next [`Throttle::call`] would invoke the wrapped
    /// function.
    pub fn is_open(&self) -> bool {
        self.last
            .as_ref()
            .is_none_or(|(last_invocation, _)| last_invocation.elapsed() >= self.window)
    }

    /// Returns the configured window length.
    pub const fn window(&self) -> Duration {
        self.window
    }
}
