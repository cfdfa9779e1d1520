//! Function decorators: wrappers that alter invocation semantics over time.
//!
//! Each decorator bundles a wrapped function with the private state its
//! policy needs (a has-run flag, an argument-keyed cache, a last-invocation
//! timestamp) and exposes a `call` method. State belongs exclusively to the
//! decorator instance that owns it; two decorators built from the same
//! function share nothing.
//!
//! - [`Once`]: invokes its function on the first call only and replays the
//!   cached result forever after
//! - [`Memoize`]: one invocation per distinct argument value
//! - [`Throttle`]: at most one invocation per time window
//! - [`delay`] (feature `async`): schedules a single deferred invocation
//!
//! `call` takes `&mut self`, so invoking a decorator concurrently from two
//! threads is unrepresentable without an external lock, and the private
//! state never needs one of its own.
//!
//! # Examples
//!
//! ```rust
//! use funcol::decorate::Once;
//!
//! let mut initialize = Once::new(|name: &str| format!("hello, {name}"));
//! assert_eq!(initialize.call("ada"), "hello, ada");
//! // Later arguments are ignored; the first result is replayed.
//! assert_eq!(initialize.call("grace"), "hello, ada");
//! ```

mod memoize;
mod once;
mod throttle;

#[cfg(feature = "async")]
mod delay;

#[cfg(feature = "async")]
pub use self::delay::delay;
pub use self::memoize::Memoize;
pub use self::once::Once;
pub use self::throttle::Throttle;
