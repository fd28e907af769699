use chrono::{DateTime, Utc};

/// The outcome of one executed attempt of one request.
///
/// Results are append-only; later requests observe earlier ones only
/// through the accumulated result list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RequestResult {
    pub id: String,

    #[serde(rename = "requestId")]
    pub request_id: String,

    #[serde(rename = "requestName")]
    pub request_name: String,

    /// 0 means the call never completed (transport failure), distinct from
    /// every real HTTP status.
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    #[serde(rename = "responseTimeMs")]
    pub response_time_ms: u64,

    /// Raw response body; may be non-JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(rename = "attemptNumber")]
    pub attempt_number: u32,

    #[serde(rename = "isRetry")]
    pub is_retry: bool,

    #[serde(rename = "executedAt")]
    pub executed_at: DateTime<Utc>,
}

impl RequestResult {
    /// Failed means the transport never completed or the server answered
    /// with 4xx/5xx.
    pub fn is_failure(&self) -> bool {
        self.status_code == 0 || self.status_code >= 400
    }
}
