//! Integration tests for the synchronous function decorators.

#![cfg(feature = "decorate")]

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use funcol::decorate::{Memoize, Once, Throttle};

// =============================================================================
// Once
// =============================================================================

#[test]
fn test_once_invokes_the_wrapped_function_exactly_once_across_five_calls() {
    let invocations = Cell::new(0);
    let mut decorated = Once::new(|argument: i32| {
        invocations.set(invocations.get() + 1);
        argument + 100
    });

    let results: Vec<i32> = (1..=5).map(|argument| decorated.call(argument)).collect();

    assert_eq!(invocations.get(), 1);
    assert_eq!(results, vec![101, 101, 101, 101, 101]);
}

#[test]
fn test_once_accepts_a_consuming_closure() {
    let owned = String::from("captured");
    let mut decorated = Once::new(move |suffix: &str| owned + suffix);

    assert_eq!(decorated.call("!"), "captured!");
    assert_eq!(decorated.call("?"), "captured!");
}

// =============================================================================
// Memoize
// =============================================================================

#[test]
fn test_memoize_invokes_once_per_distinct_argument() {
    let invocations = Cell::new(0);
    let mut decorated = Memoize::new(|argument: i32| {
        invocations.set(invocations.get() + 1);
        argument * argument
    });

    assert_eq!(decorated.call(7), 49);
    assert_eq!(decorated.call(7), 49);
    assert_eq!(invocations.get(), 1);

    assert_eq!(decorated.call(8), 64);
    assert_eq!(invocations.get(), 2);
}

#[test]
fn test_memoize_recursion_seeded_through_the_cache() {
    // Each step is computed from the two previous results, each call cached.
    let mut add = Memoize::new(|(left, right): (u64, u64)| left + right);

    let mut previous = 0;
    let mut current = 1;
    for _ in 0..10 {
        let next = add.call((previous, current));
        previous = current;
        current = next;
    }

    assert_eq!(current, 89);
}

// =============================================================================
// Throttle
// =============================================================================

#[test]
fn test_throttle_invokes_at_most_once_per_window() {
    let invocations = Cell::new(0);
    let mut throttled = Throttle::new(
        |argument: i32| {
            invocations.set(invocations.get() + 1);
            argument
        },
        Duration::from_secs(3600),
    );

    for argument in 0..10 {
        throttled.call(argument);
    }
    assert_eq!(invocations.get(), 1);
}

#[test]
fn test_throttle_suppressed_calls_return_the_latest_result() {
    let mut throttled = Throttle::new(|argument: i32| argument * 2, Duration::from_secs(3600));

    assert_eq!(throttled.call(10), 20);
    assert_eq!(throttled.call(99), 20);
}

#[test]
fn test_throttle_fires_again_after_the_window_elapses() {
    let invocations = Cell::new(0);
    let mut throttled = Throttle::new(
        |argument: i32| {
            invocations.set(invocations.get() + 1);
            argument
        },
        Duration::from_millis(15),
    );

    throttled.call(1);
    throttled.call(2);
    thread::sleep(Duration::from_millis(40));
    assert_eq!(throttled.call(3), 3);
    assert_eq!(invocations.get(), 2);
}
