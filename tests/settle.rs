use futures::executor::block_on;
use unwrapped::{Promise, Status};

#[test]
fn test_first_resolve_wins() {
    let promise: Promise<i32, &str> = Promise::new();

    promise.resolve(1).reject("late").resolve(2);

    assert_eq!(promise.status(), Status::Resolved);
    assert_eq!(
        block_on(promise),
        Ok(1),
        "only the first settlement may determine the outcome"
    );
}

#[test]
fn test_first_reject_wins() {
    let promise: Promise<i32, &str> = Promise::new();

    promise.reject("broken").resolve(3).reject("also late");

    assert_eq!(promise.status(), Status::Rejected);
    assert_eq!(block_on(promise), Err("broken"));
}

#[test]
fn test_late_observers_replay_the_outcome() {
    let promise: Promise<String, String> = Promise::new();
    promise.resolve("done".to_string());

    // Observers that begin after settlement, and repeated observers, all see
    // the same stored value.
    assert_eq!(block_on(promise.clone()), Ok("done".to_string()));
    assert_eq!(block_on(promise.rewrap()), Ok("done".to_string()));
    assert_eq!(block_on(promise), Ok("done".to_string()));
}

#[test]
fn test_executor_runs_synchronously_during_construction() {
    let mut ran = false;

    let promise: Promise<i32, &str> = Promise::with_executor(|settler| {
        ran = true;
        settler.resolve(9);
    });

    assert!(ran, "executor must run before construction returns");
    assert_eq!(promise.status(), Status::Resolved);
    assert_eq!(block_on(promise), Ok(9));
}

#[test]
fn test_pre_settled_constructors() {
    let resolved: Promise<i32, &str> = Promise::resolved(7);
    let rejected: Promise<i32, &str> = Promise::rejected("boom");

    assert_eq!(resolved.status(), Status::Resolved);
    assert_eq!(rejected.status(), Status::Rejected);
    assert_eq!(block_on(resolved), Ok(7));
    assert_eq!(block_on(rejected), Err("boom"));
}

#[test]
fn test_settler_reports_first_writer() {
    let promise: Promise<i32, &str> = Promise::new();
    let settler = promise.settler();

    assert!(settler.resolve(1), "first settlement call should win");
    assert!(!settler.clone().reject("late"), "later calls are no-ops");
    assert_eq!(settler.status(), Status::Resolved);
}

#[test]
fn test_settlers_racing_across_threads() {
    let promise: Promise<usize, String> = Promise::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let settler = promise.settler();
            std::thread::spawn(move || settler.resolve(i))
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(wins, 1, "exactly one racing settler may win");
    let value = block_on(promise).expect("promise must be resolved");
    assert!(value < 8);
}

#[test]
fn test_rewrapped_view_before_settlement() {
    let promise: Promise<u8, &str> = Promise::new();
    let plain = promise.rewrap();
    let settler = promise.settler();

    let t = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(30));
        settler.resolve(5);
    });

    assert_eq!(block_on(plain), Ok(5));
    t.join().unwrap();
}
