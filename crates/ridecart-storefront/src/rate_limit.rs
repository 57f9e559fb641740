//! Retry with exponential backoff for idempotent storefront reads.
//!
//! Only transient conditions are retried. Checkout never goes through here:
//! a repeated `cartCreate` would create a second cart.

use std::future::Future;
use std::time::Duration;

use crate::error::StorefrontError;

/// Returns `true` if `err` is transient and worth retrying after a delay.
///
/// Retriable: [`StorefrontError::RateLimited`] (429),
/// [`StorefrontError::Http`] (connection reset, timeout) and
/// [`StorefrontError::UnexpectedStatus`] with a 5xx status.
///
/// Everything else is propagated immediately. A 4xx, a body that does not
/// parse or a GraphQL error would come back the same on the next attempt.
fn is_retriable(err: &StorefrontError) -> bool {
    match err {
        StorefrontError::RateLimited { .. } | StorefrontError::Http(_) => true,
        StorefrontError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for
/// `backoff_base_secs * 2^attempt` seconds and tries again, up to
/// `max_retries` additional attempts after the first try. If all retries are
/// exhausted the last error is returned.
///
/// # Backoff schedule (example with `backoff_base_secs = 2`)
///
/// | Attempt | Sleep before next attempt |
/// |---------|--------------------------|
/// | 0 (initial) | none |
/// | 1 (first retry) | 2 × 2^0 = 2 s |
/// | 2 (second retry) | 2 × 2^1 = 4 s |
/// | 3 (third retry) | 2 × 2^2 = 8 s |
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, StorefrontError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StorefrontError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient storefront error; retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn rate_limited() -> StorefrontError {
        StorefrontError::RateLimited {
            domain: "rides.example.com".to_owned(),
            retry_after_secs: 0,
        }
    }

    async fn count_attempts(
        max_retries: u32,
        fail_times: u32,
        make_err: fn() -> StorefrontError,
    ) -> (Result<u32, StorefrontError>, u32) {
        let calls = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&calls);
        let result = retry_with_backoff(max_retries, 0, move || {
            let cc = Arc::clone(&cc);
            async move {
                let n = cc.fetch_add(1, Ordering::SeqCst);
                if n < fail_times {
                    Err(make_err())
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        (result, calls.load(Ordering::SeqCst))
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let (result, calls) = count_attempts(3, 0, rate_limited).await;
        assert_eq!(result.unwrap(), 0);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn retries_on_rate_limited_then_succeeds() {
        let (result, calls) = count_attempts(3, 2, rate_limited).await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn propagates_last_error_after_exhausting_retries() {
        let (result, calls) = count_attempts(2, u32::MAX, rate_limited).await;
        // max_retries=2 → 3 total attempts
        assert_eq!(calls, 3);
        assert!(matches!(result, Err(StorefrontError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn retries_server_errors() {
        let (result, calls) = count_attempts(1, 1, || StorefrontError::UnexpectedStatus {
            status: 503,
            url: "https://rides.example.com/api/2024-10/graphql.json".to_owned(),
        })
        .await;
        assert!(result.is_ok());
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn does_not_retry_client_errors() {
        let (result, calls) = count_attempts(3, u32::MAX, || StorefrontError::UnexpectedStatus {
            status: 401,
            url: "https://rides.example.com/api/2024-10/graphql.json".to_owned(),
        })
        .await;
        assert_eq!(calls, 1);
        assert!(matches!(
            result,
            Err(StorefrontError::UnexpectedStatus { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn does_not_retry_graphql_errors() {
        let (result, calls) = count_attempts(3, u32::MAX, || {
            StorefrontError::CatalogFetch("Access denied".to_owned())
        })
        .await;
        assert_eq!(calls, 1);
        assert!(matches!(result, Err(StorefrontError::CatalogFetch(_))));
    }
}
