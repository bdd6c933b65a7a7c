//! Promise core: the externally-settleable future type.
//!
//! A [`Promise`] pairs an ordinary future with a settlement capability that
//! may live outside the code that created it. Consumers await the promise (or
//! a [`Rewrapped`] view of it) like any future; producers settle it through
//! the promise itself or through a detached [`Settler`] handle.
//!
//! # External settlement
//!
//! ```ignore
//! use unwrapped::{Promise, Status};
//!
//! async fn external() {
//!     let promise: Promise<u32, String> = Promise::new();
//!     assert_eq!(promise.status(), Status::Pending);
//!
//!     promise.resolve(7);
//!
//!     assert_eq!(promise.status(), Status::Resolved);
//!     assert_eq!(promise.await, Ok(7));
//! }
//! ```
//!
//! # Settlement races
//!
//! Any number of handles may race to settle the same promise; the first
//! `resolve` or `reject` call wins deterministically and all later calls are
//! ignored. This is what makes a deadline racing an I/O completion safe: the
//! loser's late call is a no-op rather than a double-fulfillment.

mod settler;
mod state;
mod view;

pub use settler::Settler;
pub use state::Status;
pub use view::{Rewrapped, Settled};

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use self::state::Shared;

/// A future whose settlement can be triggered from outside.
///
/// `Promise<T, E>` is a cheaply clonable handle to a shared settlement cell.
/// It settles at most once, to either a value `T` or a rejection reason `E`,
/// and from then on replays the stored outcome to every observer, including
/// ones that start observing after settlement. Awaiting the promise requires
/// `T: Clone, E: Clone` so that each observer can receive the outcome; the
/// introspection surface ([`status`](Self::status), [`settled`](Self::settled))
/// carries no such bound.
pub struct Promise<T, E> {
    shared: Arc<Shared<T, E>>,
}

impl<T, E> Promise<T, E> {
    /// Creates a pending promise whose settlement is entirely externally
    /// driven.
    pub fn new() -> Self {
        Promise {
            shared: Arc::new(Shared::new()),
        }
    }

    /// Creates a pending promise and synchronously hands its settlement
    /// capability to `executor`, mirroring the native promise construction
    /// contract.
    ///
    /// Work scheduled inside the executor (timers, I/O registration) proceeds
    /// asynchronously after construction returns; the executor itself runs to
    /// completion before this function does.
    ///
    /// # Example
    /// ```ignore
    /// let promise: Promise<u32, String> = Promise::with_executor(|settler| {
    ///     std::thread::spawn(move || {
    ///         settler.resolve(42);
    ///     });
    /// });
    /// ```
    pub fn with_executor<F>(executor: F) -> Self
    where
        F: FnOnce(Settler<T, E>),
    {
        let promise = Self::new();
        executor(promise.settler());
        promise
    }

    /// A promise born already resolved with `value`.
    pub fn resolved(value: T) -> Self {
        Promise {
            shared: Arc::new(Shared::pre_settled(Ok(value))),
        }
    }

    /// A promise born already rejected with `reason`.
    pub fn rejected(reason: E) -> Self {
        Promise {
            shared: Arc::new(Shared::pre_settled(Err(reason))),
        }
    }

    /// Resolves the promise with `value` and returns the promise for fluent
    /// use.
    ///
    /// If the promise has already settled, this call has no effect. It never
    /// fails and never panics.
    pub fn resolve(&self, value: T) -> &Self {
        self.shared.settle(Ok(value));
        self
    }

    /// Rejects the promise with `reason` and returns the promise for fluent
    /// use.
    ///
    /// If the promise has already settled, this call has no effect. It never
    /// fails and never panics.
    pub fn reject(&self, reason: E) -> &Self {
        self.shared.settle(Err(reason));
        self
    }

    /// Current settlement state.
    ///
    /// Pure observation with no side effect; safe to poll repeatedly.
    pub fn status(&self) -> Status {
        self.shared.status()
    }

    /// Returns a detached settlement capability for this promise.
    ///
    /// The settler (and any clone of it) may be handed to unrelated code;
    /// whichever holder settles first determines the outcome.
    pub fn settler(&self) -> Settler<T, E> {
        Settler::new(Arc::clone(&self.shared))
    }

    /// Returns a future that completes once this promise settles, regardless
    /// of whether it resolved or rejected.
    pub fn settled(&self) -> Settled<T, E> {
        Settled {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Returns a plain future view of the same outcome, for code that does
    /// not need the extended surface.
    pub fn rewrap(&self) -> Rewrapped<T, E> {
        Rewrapped {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, E> Promise<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a promise that mirrors an existing future's eventual outcome.
    ///
    /// When `future` completes with `Ok`, the promise is resolved with its
    /// value; when it completes with `Err`, the promise is rejected with its
    /// error. The relationship is one-shot and one-directional, and source
    /// failures always reach the rejection path. The source future is driven
    /// by a relay task on the host runtime, so the promise settles even if
    /// nobody is awaiting it yet.
    ///
    /// External settlement may still win the race against the source future;
    /// the relay's later settlement is then a no-op.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime context.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let promise = Self::new();
        let settler = promise.settler();
        tokio::spawn(async move {
            match future.await {
                Ok(value) => settler.resolve(value),
                Err(reason) => settler.reject(reason),
            };
        });
        promise
    }
}

impl<T: Clone, E: Clone> Future for Promise<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.shared.poll_outcome(cx)
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Promise {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, E> Default for Promise<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise")
            .field("status", &self.status())
            .finish()
    }
}
