use std::time::{Duration, Instant};

use unwrapped::{Elapsed, Promise, Status, timer, with_timeout, with_timeout_executor};

#[tokio::test]
async fn test_timeout_completes_before_deadline() {
    let promise: Promise<(), Elapsed> =
        with_timeout(Duration::from_millis(1000), timer(Duration::from_millis(10)));

    assert!(
        promise.await.is_ok(),
        "the inner timer should win the race against the deadline"
    );
}

#[tokio::test]
async fn test_timeout_expires() {
    let start = Instant::now();

    let promise: Promise<i32, Elapsed> =
        with_timeout(Duration::from_millis(100), std::future::pending());
    let reason = promise
        .await
        .expect_err("a never-settling source must lose to the deadline");

    assert_eq!(reason.duration(), Duration::from_millis(100));
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_timeout_executor_variant_expires() {
    let promise: Promise<i32, Elapsed> =
        with_timeout_executor(Duration::from_millis(60), |_settler| {
            // Settlement capability dropped unused: the deadline is the only
            // remaining writer.
        });

    promise.settled().await;
    assert_eq!(promise.status(), Status::Rejected);
}

#[tokio::test]
async fn test_late_deadline_firing_is_a_noop() {
    let promise: Promise<i32, Elapsed> =
        with_timeout_executor(Duration::from_millis(50), |settler| {
            settler.resolve(5);
        });

    assert_eq!(promise.clone().await, Ok(5));

    // Let the deadline timer fire; the outcome must not change.
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(promise.status(), Status::Resolved);
    assert_eq!(
        promise.await,
        Ok(5),
        "a deadline firing after settlement must be a no-op"
    );
}

#[tokio::test]
async fn test_deadline_converts_into_caller_error_type() {
    #[derive(Clone, Debug, PartialEq, thiserror::Error)]
    enum FetchError {
        #[error("timed out: {0}")]
        Timeout(#[from] Elapsed),
    }

    let promise: Promise<u8, FetchError> =
        with_timeout(Duration::from_millis(30), std::future::pending());
    let err = promise.await.expect_err("deadline should fire");

    assert!(matches!(err, FetchError::Timeout(_)));
}

#[tokio::test]
async fn test_deadline_armed_on_an_external_promise() {
    let promise: Promise<i32, Elapsed> = Promise::new();
    promise.deadline(Duration::from_millis(40));

    promise.settled().await;
    assert_eq!(promise.status(), Status::Rejected);
}
