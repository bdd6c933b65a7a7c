//! Derived future views over a promise.
//!
//! Both views share the promise's settlement cell but expose narrower
//! contracts: [`Settled`] signals completion without carrying the outcome,
//! and [`Rewrapped`] is a plain future of the outcome with none of the
//! extended promise surface.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use super::state::Shared;

/// A future that completes once the owning promise settles, success and
/// failure alike.
///
/// Created via [`Promise::settled`](super::Promise::settled). It resolves with
/// `()` exactly once the promise reaches either terminal state and never
/// fails, which makes it suitable for "is it done" checks that must not
/// propagate the promise's own error. Completes immediately on an
/// already-settled promise.
pub struct Settled<T, E> {
    pub(super) shared: Arc<Shared<T, E>>,
}

impl<T, E> Future for Settled<T, E> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.shared.poll_settled(cx)
    }
}

/// A plain future view of a promise's eventual outcome.
///
/// Created via [`Promise::rewrap`](super::Promise::rewrap), for handing to
/// code that should see an ordinary future without the settlement or
/// introspection surface. The outcome observed here is exactly the one
/// produced by the winning `resolve`/`reject` call.
pub struct Rewrapped<T, E> {
    pub(super) shared: Arc<Shared<T, E>>,
}

impl<T: Clone, E: Clone> Future for Rewrapped<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.shared.poll_outcome(cx)
    }
}
