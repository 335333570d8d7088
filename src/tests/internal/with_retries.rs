use std::sync::atomic::{AtomicU32, Ordering};

use reqwest::StatusCode;

use crate::http::functions::execute_with_retries;
use crate::http::structs::FetchError;

fn server_error() -> FetchError {
    FetchError::BadStatus(StatusCode::INTERNAL_SERVER_ERROR)
}

#[tokio::test]
async fn always_failing_request_is_tried_retries_plus_one_times() {
    let calls = AtomicU32::new(0);

    let result: Result<(), FetchError> = execute_with_retries("/files", 3, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(server_error()) }
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 4);
    match result {
        Err(FetchError::Exhausted {
            endpoint,
            attempts,
            last,
        }) => {
            assert_eq!(endpoint, "/files");
            assert_eq!(attempts, 4);
            assert!(matches!(*last, FetchError::BadStatus(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
        }
        other => panic!("预期 Exhausted，得到 {:?}", other),
    }
}

#[tokio::test]
async fn zero_retries_means_a_single_attempt() {
    let calls = AtomicU32::new(0);

    let result: Result<(), FetchError> = execute_with_retries("/chunk", 0, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(server_error()) }
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(matches!(result, Err(FetchError::Exhausted { attempts: 1, .. })));
}

#[tokio::test]
async fn success_on_the_last_allowed_attempt_is_returned() {
    let calls = AtomicU32::new(0);

    let result = execute_with_retries("/chunk", 3, || {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n <= 3 { Err(server_error()) } else { Ok(n) }
        }
    })
    .await;

    assert_eq!(result.unwrap(), 4);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn first_success_stops_retrying() {
    let calls = AtomicU32::new(0);

    let result = execute_with_retries("/files", 5, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, FetchError>("ok") }
    })
    .await;

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn largest_retry_count_still_counts_attempts() {
    let calls = AtomicU32::new(0);

    let result = execute_with_retries("/chunk", u32::MAX, || {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n <= 5 { Err(server_error()) } else { Ok(n) }
        }
    })
    .await;

    assert_eq!(result.unwrap(), 6);
}
