//! Deadline races over promises.
//!
//! A deadline is just another party racing to settle the promise: when it
//! fires first, it forces the promise into the rejected state through the
//! ordinary idempotent reject path, carrying an [`Elapsed`] reason. When the
//! promise settles first, the deadline's later firing is a no-op. The pending
//! timer is deliberately not cancelled on early settlement; a late no-op
//! firing costs nothing beyond the timer entry itself.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::promise::{Promise, Settler};

/// Rejection reason manufactured by a deadline that fired before the promise
/// settled on its own.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("deadline of {0:?} elapsed before settlement")]
pub struct Elapsed(Duration);

impl Elapsed {
    /// The deadline duration that ran out.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

/// Builds a promise mirroring `future`, as
/// [`Promise::from_future`] would, then races it against a deadline.
///
/// If the deadline elapses before the mirrored future settles the promise,
/// the promise is rejected with an [`Elapsed`] reason converted into `E`.
///
/// # Panics
/// Panics if called outside of a Tokio runtime context.
pub fn with_timeout<T, E, F>(duration: Duration, future: F) -> Promise<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<Elapsed> + Send + 'static,
{
    let promise = Promise::from_future(future);
    promise.deadline(duration);
    promise
}

/// Builds a promise through an executor, as
/// [`Promise::with_executor`] would, then races it against a deadline.
///
/// # Panics
/// Panics if called outside of a Tokio runtime context.
pub fn with_timeout_executor<T, E, X>(duration: Duration, executor: X) -> Promise<T, E>
where
    X: FnOnce(Settler<T, E>),
    T: Send + 'static,
    E: From<Elapsed> + Send + 'static,
{
    let promise = Promise::with_executor(executor);
    promise.deadline(duration);
    promise
}

impl<T, E> Promise<T, E>
where
    T: Send + 'static,
    E: From<Elapsed> + Send + 'static,
{
    /// Arms a deadline on this promise and returns it for fluent use.
    ///
    /// Once `duration` elapses, the promise is rejected with [`Elapsed`]
    /// through the idempotent reject path, so a promise that settled earlier
    /// keeps its outcome. The timer keeps running to its deadline even when
    /// the promise settles first; its firing is then a no-op.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime context.
    pub fn deadline(&self, duration: Duration) -> &Self {
        let settler = self.settler();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if settler.reject(Elapsed(duration).into()) {
                debug!(?duration, "deadline elapsed, promise rejected");
            }
        });
        self
    }
}
