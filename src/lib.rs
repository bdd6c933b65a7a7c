//! Externally-settleable promises that interoperate with standard futures.
//!
//! This crate provides [`Promise`], a future whose settlement (resolution or
//! rejection) can be triggered from outside the code that created it. A promise
//! behaves like any other future to its consumers, while also exposing an
//! observable [`Status`] and a transferable [`Settler`] capability so that
//! unrelated code, such as an I/O callback or a deadline timer, can decide its
//! outcome. Settlement is idempotent: the first `resolve` or `reject` call wins
//! and every later call is a no-op.
//!
//! # Architecture
//!
//! - **Promise**: Clonable handle implementing [`Future`](std::future::Future),
//!   awaited for a `Result<T, E>` outcome
//! - **Settler**: Write-once-effective settlement capability, freely sharable
//!   across threads
//! - **Status / Settled**: Introspection surface for observing completion
//!   without consuming the outcome
//! - **Callback**: Adapter handle for legacy callback-style APIs
//! - **time**: Timer and deadline helpers built on the host runtime's timers
//!
//! # Example
//!
//! ```ignore
//! use unwrapped::Promise;
//!
//! async fn example() {
//!     let promise: Promise<u32, String> = Promise::new();
//!     let settler = promise.settler();
//!
//!     // Hand the settler to any other piece of code.
//!     std::thread::spawn(move || {
//!         settler.resolve(42);
//!     });
//!
//!     assert_eq!(promise.await, Ok(42));
//! }
//! ```

mod callback;
mod promise;
pub mod time;

pub use callback::Callback;
pub use promise::{Promise, Rewrapped, Settled, Settler, Status};
pub use time::{Elapsed, timer, with_timeout, with_timeout_executor};
