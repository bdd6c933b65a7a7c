use std::time::{Duration, Instant};

use unwrapped::{Status, timer};

#[tokio::test]
async fn test_timer_waits_at_least_the_duration() {
    let start = Instant::now();

    timer::<()>(Duration::from_millis(50))
        .await
        .expect("timers never reject");

    assert!(
        start.elapsed() >= Duration::from_millis(50),
        "timer should wait at least the specified duration"
    );
}

#[tokio::test]
async fn test_timer_zero_duration_resolves_quickly() {
    let start = Instant::now();

    timer::<()>(Duration::from_millis(0))
        .await
        .expect("timers never reject");

    assert!(
        start.elapsed() < Duration::from_millis(100),
        "zero duration timer should resolve almost immediately"
    );
}

#[tokio::test]
async fn test_timer_status_transitions() {
    let delay: unwrapped::Promise<(), ()> = timer(Duration::from_millis(100));

    assert_eq!(delay.status(), Status::Pending);

    delay.settled().await;

    assert_eq!(delay.status(), Status::Resolved);
}
