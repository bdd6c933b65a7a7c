//! Adapters from legacy callback-style APIs to promises.
//!
//! Many older interfaces report completion by invoking a caller-supplied
//! callback instead of returning a future. [`Promise::from_callback`] bridges
//! that gap: it hands the legacy API a [`Callback`] handle and settles the
//! promise on the handle's first invocation. The conventional error-first
//! `(error, result)` argument pair is rendered as a `Result<T, E>`, since
//! exactly one of the two positions is ever meaningful.
//!
//! # Example
//!
//! ```ignore
//! use unwrapped::Promise;
//!
//! fn read_config(on_done: impl FnOnce(Result<String, std::io::Error>) + Send + 'static) {
//!     // ... legacy API ...
//! }
//!
//! let promise: Promise<String, std::io::Error> =
//!     Promise::from_callback(|handler| read_config(move |outcome| handler.call(outcome)));
//! ```
//!
//! For callbacks whose argument shape does not match the error-first
//! convention, [`Promise::from_callback_with`] takes a transformer that
//! reinterprets the raw arguments before the default settle logic applies.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::promise::Promise;

type Transform<A> = Box<dyn FnOnce(A) + Send>;

/// Callback handle handed to a legacy wrapper function.
///
/// The handle is clonable and may be invoked from any thread, but only the
/// first [`call`](Self::call) across all clones settles the promise; later
/// invocations are no-ops.
pub struct Callback<A> {
    transform: Arc<Mutex<Option<Transform<A>>>>,
}

impl<A> Callback<A> {
    fn new(transform: Transform<A>) -> Self {
        Callback {
            transform: Arc::new(Mutex::new(Some(transform))),
        }
    }

    /// Invokes the handler with the raw callback arguments.
    ///
    /// The first call settles the owning promise; any later call is ignored.
    pub fn call(&self, args: A) {
        let transform = self.transform.lock().unwrap().take();
        match transform {
            Some(transform) => transform(args),
            None => trace!("callback invoked after settlement, ignoring"),
        }
    }

    /// Returns `true` once the handler has been invoked.
    pub fn is_spent(&self) -> bool {
        self.transform.lock().unwrap().is_none()
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Callback {
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("spent", &self.is_spent())
            .finish()
    }
}

impl<T, E> Promise<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Adapts a legacy callback-style operation into a promise.
    ///
    /// `wrapper` is invoked once, synchronously, and handed a [`Callback`]
    /// expecting the error-first outcome as a `Result`: `Err` rejects the
    /// promise, `Ok` resolves it. Only the handler's first invocation has
    /// effect.
    ///
    /// # Example
    /// ```ignore
    /// let promise: Promise<i32, String> = Promise::from_callback(|handler| {
    ///     handler.call(Ok(42));
    /// });
    /// ```
    pub fn from_callback<W>(wrapper: W) -> Self
    where
        W: FnOnce(Callback<Result<T, E>>),
    {
        Self::from_callback_with(wrapper, |outcome| outcome)
    }

    /// Adapts a callback-style operation whose arguments do not follow the
    /// error-first convention.
    ///
    /// `wrapper` receives a [`Callback`] over the raw argument shape `A`, and
    /// `transform` reinterprets those arguments as a `Result<T, E>` before the
    /// default settle logic applies. The transform runs at most once, on the
    /// handler's first invocation.
    ///
    /// # Example
    /// ```ignore
    /// // Exit-code style callback: zero is success.
    /// let promise: Promise<String, i32> = Promise::from_callback_with(
    ///     |handler| handler.call((0, "ok".to_string())),
    ///     |(code, out)| if code == 0 { Ok(out) } else { Err(code) },
    /// );
    /// ```
    pub fn from_callback_with<A, W, X>(wrapper: W, transform: X) -> Self
    where
        W: FnOnce(Callback<A>),
        X: FnOnce(A) -> Result<T, E> + Send + 'static,
    {
        let promise = Self::new();
        let settler = promise.settler();
        let handler = Callback::new(Box::new(move |args: A| {
            match transform(args) {
                Ok(value) => settler.resolve(value),
                Err(reason) => settler.reject(reason),
            };
        }));
        wrapper(handler);
        promise
    }
}
