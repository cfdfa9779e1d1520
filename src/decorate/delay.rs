//! A single deferred invocation on the async runtime.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// Schedules `function` to run no earlier than `wait` from now.
///
/// The function is handed to the tokio runtime as a zero-argument
/// continuation behind a sleep; arguments for it are closure captures.
/// `delay` returns immediately with the handle to the pending invocation:
/// awaiting the handle yields the function's result, and
/// [`abort`](JoinHandle::abort) cancels an invocation that has not fired
/// yet. The timer guarantees only "not before `wait`"; the exact firing
/// time depends on the runtime's scheduling.
///
/// # Panics
///
/// Panics if called outside a tokio runtime, as task spawning does.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use funcol::decorate::delay;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let greeting = String::from("hello");
/// let handle = delay(move || format!("{greeting}, world"), Duration::from_millis(1));
/// assert_eq!(handle.await.unwrap(), "hello, world");
/// # }
/// ```
pub fn delay<R, F>(function: F, wait: Duration) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::spawn(async move {
        time::sleep(wait).await;
        function()
    })
}
