use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Backoff before the first retry. Doubles on every further attempt.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(100);

/// Markers of failures worth retrying, matched against the error's debug output.
const TRANSIENT_MARKERS: &[&str] = &[
    "ConnectionReset",
    "BrokenPipe",
    "Interrupted",
    "TimedOut",
    "Throttling",
    "RequestLimitExceeded",
    "DispatchFailure",
];

/// Whether an error looks transient (network hiccup or backend throttling).
pub fn is_transient<E: Debug>(error: &E) -> bool {
    let error_msg = format!("{:?}", error);
    TRANSIENT_MARKERS
        .iter()
        .any(|marker| error_msg.contains(marker))
}

/// Run `operation`, retrying transient failures with exponential backoff.
///
/// Makes at most `max_retries + 1` attempts. Non-transient errors and the
/// error of the last attempt are returned as-is.
pub async fn retry_with_backoff<F, Fut, T, E>(
    max_retries: usize,
    base_delay: Duration,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Debug,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if attempt >= max_retries || !is_transient(&e) {
                    return Err(e);
                }

                warn!(
                    "Transient error in {} (attempt {}/{}): {:?}",
                    operation_name,
                    attempt + 1,
                    max_retries,
                    e
                );

                // 100ms, 200ms, 400ms, ... capped at 2^10 steps
                let backoff = base_delay * (1u32 << attempt.min(10));
                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct TestError {
        message: String,
    }

    fn error(message: &str) -> TestError {
        TestError {
            message: message.to_string(),
        }
    }

    const FAST: Duration = Duration::from_millis(1);

    #[test]
    fn test_is_transient() {
        assert!(is_transient(&error("ConnectionReset by peer")));
        assert!(is_transient(&error("Throttling: Rate exceeded")));
        assert!(is_transient(&error("DispatchFailure(io)")));
        assert!(!is_transient(&error("AccessDenied")));
        assert!(!is_transient(&error("InvalidParameterValue")));
    }

    #[tokio::test]
    async fn test_retry_success_on_first_attempt() {
        let result =
            retry_with_backoff(3, FAST, "test_operation", || async { Ok::<i32, TestError>(42) })
                .await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_retry_success_after_retries() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        let result = retry_with_backoff(5, FAST, "test_operation", move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                let count = counter.fetch_add(1, Ordering::SeqCst);
                if count < 2 {
                    Err(error("Throttling error"))
                } else {
                    Ok(100)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 100);
        // 2 failures + 1 success
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_non_transient_error() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        let result = retry_with_backoff(5, FAST, "test_operation", move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, TestError>(error("AccessDenied"))
            }
        })
        .await;

        assert_eq!(result.unwrap_err().message, "AccessDenied");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_max_retries_exceeded() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        let result = retry_with_backoff(3, FAST, "test_operation", move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, TestError>(error("TimedOut error"))
            }
        })
        .await;

        assert_eq!(result.unwrap_err().message, "TimedOut error");
        // 0..=3 = 4 attempts
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_retry_zero_max_retries() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        let result = retry_with_backoff(0, FAST, "test_operation", move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, TestError>(error("ConnectionReset error"))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_exponential_backoff() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);
        let start = tokio::time::Instant::now();

        let result = retry_with_backoff(2, DEFAULT_BASE_DELAY, "test_operation", move || {
            let counter = Arc::clone(&counter_clone);
            async move {
                let count = counter.fetch_add(1, Ordering::SeqCst);
                if count < 2 {
                    Err(error("TimedOut error"))
                } else {
                    Ok(400)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 400);
        // 100ms + 200ms of (virtual) sleep
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
