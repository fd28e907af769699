use crate::executor::{Event, EventSink};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct ExecutionMetrics {
    pub requests_started: usize,
    pub requests_completed: usize,
    pub requests_failed: usize,
    pub requests_skipped: usize,
    pub retries: usize,
    pub total_response_time_ms: u64,
}

impl ExecutionMetrics {
    pub fn record_started(&mut self) {
        self.requests_started += 1;
    }

    pub fn record_completed(&mut self, status_code: u16, response_time_ms: u64) {
        self.requests_completed += 1;
        self.total_response_time_ms += response_time_ms;
        if status_code == 0 || status_code >= 400 {
            self.requests_failed += 1;
        }
    }

    pub fn record_retry(&mut self, status_code: u16) {
        // A retried failure is not terminal; only final attempts count as
        // failed. A retry of a non-failure status voids nothing.
        self.retries += 1;
        if status_code == 0 || status_code >= 400 {
            self.requests_failed = self.requests_failed.saturating_sub(1);
        }
    }

    pub fn record_skipped(&mut self) {
        self.requests_skipped += 1;
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "started": self.requests_started,
                "completed": self.requests_completed,
                "failed": self.requests_failed,
                "skipped": self.requests_skipped,
                "retried": self.retries,
            },
            "total_response_time_ms": self.total_response_time_ms,
        })
    }
}

pub struct MetricsCollector {
    metrics: Arc<Mutex<ExecutionMetrics>>,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(Mutex::new(ExecutionMetrics::default())),
        }
    }

    pub async fn record_started(&self) {
        self.metrics.lock().await.record_started();
    }

    pub async fn record_completed(&self, status_code: u16, response_time_ms: u64) {
        self.metrics.lock().await.record_completed(status_code, response_time_ms);
    }

    pub async fn record_retry(&self, status_code: u16) {
        self.metrics.lock().await.record_retry(status_code);
    }

    pub async fn record_skipped(&self) {
        self.metrics.lock().await.record_skipped();
    }

    pub async fn snapshot(&self) -> ExecutionMetrics {
        self.metrics.lock().await.clone()
    }
}

pub struct MetricsEventSink {
    collector: Arc<MetricsCollector>,
    base: Arc<dyn EventSink>,
}

impl MetricsEventSink {
    pub fn new(collector: Arc<MetricsCollector>, base: Arc<dyn EventSink>) -> Self {
        Self { collector, base }
    }
}

#[async_trait]
impl EventSink for MetricsEventSink {
    async fn emit(&self, event: Event) {
        match &event {
            Event::RequestStarted { .. } => {
                self.collector.record_started().await;
            }
            Event::RequestCompleted { status_code, response_time_ms, .. } => {
                self.collector.record_completed(*status_code, *response_time_ms).await;
            }
            Event::RequestRetrying { status_code, .. } => {
                self.collector.record_retry(*status_code).await;
            }
            Event::RequestSkipped { .. } => {
                self.collector.record_skipped().await;
            }
            _ => {}
        }
        self.base.emit(event).await;
    }
}
