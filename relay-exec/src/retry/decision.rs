use std::time::Duration;

use relay_core::types::{RequestResult, RetryConfig};

/// Whether this attempt's outcome is retryable under `config`.
///
/// Transport failures (status 0) always are; completed exchanges only
/// when their status is listed in `retryOnStatusCodes`. The attempt
/// budget is the caller's concern.
pub fn should_retry(result: &RequestResult, config: &RetryConfig) -> bool {
    result.status_code == 0 || config.retry_on_status_codes.contains(&result.status_code)
}

/// Delay to sleep after `attempt` attempts have completed.
///
/// With exponential backoff the base delay doubles per completed attempt:
/// `delayMs * 2^(attempt-1)`. Without it, the base delay is constant.
pub fn backoff_delay(config: &RetryConfig, attempt: u32) -> Duration {
    let millis = if config.exponential_backoff {
        config
            .delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)))
    } else {
        config.delay_ms
    };
    Duration::from_millis(millis)
}

/// The retry policy in force for a request: an explicit override wins,
/// then the request's own config, then the defaults.
pub fn effective_config(
    override_config: Option<&RetryConfig>,
    request_config: Option<&RetryConfig>,
) -> RetryConfig {
    override_config
        .or(request_config)
        .cloned()
        .unwrap_or_default()
}
