/// Retry policy for one request: attempt budget, backoff, and the status
/// codes worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    #[serde(rename = "maxAttempts")]
    pub max_attempts: u32,

    /// Base delay before the second attempt, in milliseconds.
    #[serde(default = "default_delay_ms")]
    #[serde(rename = "delayMs")]
    pub delay_ms: u64,

    #[serde(default = "crate::types::default_true")]
    #[serde(rename = "exponentialBackoff")]
    pub exponential_backoff: bool,

    #[serde(default = "default_retry_statuses")]
    #[serde(rename = "retryOnStatusCodes")]
    pub retry_on_status_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
            exponential_backoff: true,
            retry_on_status_codes: default_retry_statuses(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_retry_statuses() -> Vec<u16> {
    vec![500, 502, 503, 504]
}
