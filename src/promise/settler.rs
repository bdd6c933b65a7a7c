//! Settlement capability handle.
//!
//! A [`Settler`] is the write side of a promise, detached from the consuming
//! surface. Ownership of a settler can be transferred to unrelated code (an
//! I/O callback, a timer task, another thread) without handing out the promise
//! itself. Cloning is cheap; every clone refers to the same settlement cell,
//! and only the first `resolve`/`reject` call across all of them has effect.

use std::fmt;
use std::sync::Arc;

use super::state::{Shared, Status};

/// Write-once-effective settlement capability for a promise.
pub struct Settler<T, E> {
    shared: Arc<Shared<T, E>>,
}

impl<T, E> Settler<T, E> {
    pub(crate) fn new(shared: Arc<Shared<T, E>>) -> Self {
        Settler { shared }
    }

    /// Resolves the promise with `value`.
    ///
    /// Returns whether this call performed the settlement; `false` means some
    /// earlier `resolve` or `reject` already won and this call was a no-op.
    pub fn resolve(&self, value: T) -> bool {
        self.shared.settle(Ok(value))
    }

    /// Rejects the promise with `reason`.
    ///
    /// Returns whether this call performed the settlement, as for
    /// [`resolve`](Self::resolve).
    pub fn reject(&self, reason: E) -> bool {
        self.shared.settle(Err(reason))
    }

    /// Current settlement state of the underlying promise.
    pub fn status(&self) -> Status {
        self.shared.status()
    }
}

impl<T, E> Clone for Settler<T, E> {
    fn clone(&self) -> Self {
        Settler {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, E> fmt::Debug for Settler<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settler")
            .field("status", &self.status())
            .finish()
    }
}
