//! Delay promises backed by the host runtime's timers.

use std::time::Duration;

use crate::promise::Promise;

/// Returns a promise with no payload that resolves once `duration` has
/// elapsed.
///
/// The building block for delays and deadlines. The rejection type `E` is
/// free because a timer never rejects; it only exists so the result can
/// participate in races against fallible promises.
///
/// # Panics
/// Panics if called outside of a Tokio runtime context.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use unwrapped::timer;
///
/// async fn delay() {
///     timer::<()>(Duration::from_millis(50)).await.expect("timers never reject");
/// }
/// ```
pub fn timer<E>(duration: Duration) -> Promise<(), E>
where
    E: Send + 'static,
{
    Promise::with_executor(|settler| {
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            settler.resolve(());
        });
    })
}
