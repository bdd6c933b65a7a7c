//! Shared settlement cell backing every promise handle.
//!
//! All handles to one promise (the promise itself, its clones, settlers,
//! and derived futures) point at a single [`Shared`] cell. The cell holds the
//! one-shot state machine: it starts pending, transitions at most once into a
//! settled `Result`, and from then on replays the stored outcome to every
//! observer. Tasks that polled while the cell was pending leave their wakers
//! behind and are woken on the transition.

use std::fmt;
use std::mem;
use std::sync::Mutex;
use std::task::{Context, Poll, Waker};

use tracing::trace;

/// Observable settlement state of a promise.
///
/// Transitions follow a one-shot state machine:
///
/// - `Pending -> Resolved`
/// - `Pending -> Rejected`
///
/// Both terminal states are final; no transition leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// No settlement has happened yet.
    Pending,
    /// The promise settled with a value.
    Resolved,
    /// The promise settled with a rejection reason.
    Rejected,
}

impl Status {
    /// Returns `true` once the promise has reached either terminal state.
    pub fn is_settled(self) -> bool {
        !matches!(self, Status::Pending)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pending => "pending",
            Status::Resolved => "resolved",
            Status::Rejected => "rejected",
        })
    }
}

enum State<T, E> {
    Pending,
    Settled(Result<T, E>),
}

struct Inner<T, E> {
    state: State<T, E>,
    /// Wakers of tasks that polled before settlement.
    waiters: Vec<Waker>,
}

impl<T, E> Inner<T, E> {
    fn register(&mut self, cx: &mut Context<'_>) {
        // Re-polls from the same task must not pile up duplicate wakers.
        if !self.waiters.iter().any(|w| w.will_wake(cx.waker())) {
            self.waiters.push(cx.waker().clone());
        }
    }
}

/// The one-shot settlement cell shared by every handle to the same promise.
///
/// The mutex makes the pending-to-settled transition atomic under true
/// concurrent-thread access, so arbitrarily many handle holders may race to
/// settle without external locking.
pub(crate) struct Shared<T, E> {
    inner: Mutex<Inner<T, E>>,
}

impl<T, E> Shared<T, E> {
    pub(crate) fn new() -> Self {
        Shared {
            inner: Mutex::new(Inner {
                state: State::Pending,
                waiters: Vec::new(),
            }),
        }
    }

    /// A cell born already settled, with no waiters to wake.
    pub(crate) fn pre_settled(outcome: Result<T, E>) -> Self {
        Shared {
            inner: Mutex::new(Inner {
                state: State::Settled(outcome),
                waiters: Vec::new(),
            }),
        }
    }

    /// Performs the one-shot settlement transition.
    ///
    /// The first call stores the outcome and wakes every registered waiter;
    /// all later calls are no-ops. Returns whether this call won.
    pub(crate) fn settle(&self, outcome: Result<T, E>) -> bool {
        let waiters = {
            let mut inner = self.inner.lock().unwrap();
            match inner.state {
                State::Pending => {
                    trace!(resolved = outcome.is_ok(), "promise settled");
                    inner.state = State::Settled(outcome);
                    mem::take(&mut inner.waiters)
                }
                State::Settled(_) => {
                    trace!("settlement ignored, promise already settled");
                    return false;
                }
            }
        };

        // Wake outside the lock so woken tasks can poll immediately.
        for waker in waiters {
            waker.wake();
        }
        true
    }

    pub(crate) fn status(&self) -> Status {
        match &self.inner.lock().unwrap().state {
            State::Pending => Status::Pending,
            State::Settled(Ok(_)) => Status::Resolved,
            State::Settled(Err(_)) => Status::Rejected,
        }
    }

    /// Reports whether the cell has settled, registering the caller's waker
    /// while it has not. The outcome itself is left untouched.
    pub(crate) fn poll_settled(&self, cx: &mut Context<'_>) -> Poll<()> {
        let mut inner = self.inner.lock().unwrap();
        if matches!(inner.state, State::Settled(_)) {
            return Poll::Ready(());
        }
        inner.register(cx);
        Poll::Pending
    }
}

impl<T: Clone, E: Clone> Shared<T, E> {
    /// Polls for the settled outcome, replaying a clone of the stored
    /// value or rejection reason to each observer.
    pub(crate) fn poll_outcome(&self, cx: &mut Context<'_>) -> Poll<Result<T, E>> {
        let mut inner = self.inner.lock().unwrap();
        if let State::Settled(outcome) = &inner.state {
            return Poll::Ready(outcome.clone());
        }
        inner.register(cx);
        Poll::Pending
    }
}
