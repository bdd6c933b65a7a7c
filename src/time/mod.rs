//! Time-based construction helpers: delay promises and deadline races.
//!
//! This module provides the promise constructors that need the host runtime's
//! timer facilities:
//!
//! - [`timer`] for a promise that resolves after a fixed delay
//! - [`with_timeout`] / [`with_timeout_executor`] for building a promise and
//!   racing it against a deadline
//! - [`Promise::deadline`](crate::Promise::deadline) as the underlying
//!   building block that arms a deadline on any existing promise
//!
//! # Example: Deadline race
//!
//! ```ignore
//! use std::time::Duration;
//! use unwrapped::{with_timeout, Elapsed, Promise};
//!
//! async fn fetch() {
//!     let promise: Promise<String, Elapsed> =
//!         with_timeout(Duration::from_millis(100), std::future::pending());
//!     assert!(promise.await.is_err());
//! }
//! ```
//!
//! A deadline that loses the race simply fires later as a no-op; pending
//! timers are not cancelled on early settlement.

mod timeout;
mod timer;

pub use timeout::{Elapsed, with_timeout, with_timeout_executor};
pub use timer::timer;
