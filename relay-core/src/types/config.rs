use std::collections::HashMap;

use crate::types::ExecutionMode;

/// Per-call execution settings. Constructed by the caller for each
/// execution; never persisted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExecutionConfig {
    /// Caller-supplied values for `{{name}}` placeholders.
    #[serde(default)]
    pub placeholders: HashMap<String, String>,

    #[serde(default)]
    pub mode: ExecutionMode,

    /// Upper bound on concurrently in-flight requests in Parallel mode.
    #[serde(default = "default_max_parallel")]
    #[serde(rename = "maxParallelRequests")]
    pub max_parallel_requests: usize,

    /// Per-call HTTP timeout.
    #[serde(default = "default_timeout_ms")]
    #[serde(rename = "timeoutMs")]
    pub timeout_ms: u64,

    /// Accepted for config-surface compatibility; no mode consumes it yet.
    #[serde(default)]
    #[serde(rename = "stopOnFirstError")]
    pub stop_on_first_error: bool,

    #[serde(default = "crate::types::default_true")]
    #[serde(rename = "enableRetries")]
    pub enable_retries: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            placeholders: HashMap::new(),
            mode: ExecutionMode::Sequential,
            max_parallel_requests: default_max_parallel(),
            timeout_ms: default_timeout_ms(),
            stop_on_first_error: false,
            enable_retries: true,
        }
    }
}

fn default_max_parallel() -> usize {
    5
}

fn default_timeout_ms() -> u64 {
    30_000
}
