use async_trait::async_trait;
use serde_json::json;

use relay_core::types::ExecutionMode;

#[derive(Debug, Clone)]
pub enum Event {
    IntegrationStarted {
        integration_id: String,
        name: String,
        mode: ExecutionMode,
        requests: usize,
    },
    IntegrationCompleted {
        integration_id: String,
        name: String,
        results: usize,
    },
    RequestStarted {
        request_id: String,
        name: String,
        attempt: u32,
    },
    RequestCompleted {
        request_id: String,
        name: String,
        status_code: u16,
        response_time_ms: u64,
        attempt: u32,
    },
    RequestRetrying {
        request_id: String,
        name: String,
        status_code: u16,
        attempt: u32,
        delay_ms: u64,
    },
    RequestSkipped {
        request_id: String,
        name: String,
    },
    ExecutionStopped {
        request_id: String,
        name: String,
    },
    ResultPersistFailed {
        request_id: String,
        error: String,
    },
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}

pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        let json = match event {
            Event::IntegrationStarted { integration_id, name, mode, requests } => {
                json!({ "type": "integration.started", "integration_id": integration_id, "name": name, "mode": mode.as_str(), "requests": requests })
            }
            Event::IntegrationCompleted { integration_id, name, results } => {
                json!({ "type": "integration.completed", "integration_id": integration_id, "name": name, "results": results })
            }
            Event::RequestStarted { request_id, name, attempt } => {
                json!({ "type": "request.started", "request_id": request_id, "name": name, "attempt": attempt })
            }
            Event::RequestCompleted { request_id, name, status_code, response_time_ms, attempt } => {
                json!({ "type": "request.completed", "request_id": request_id, "name": name, "status_code": status_code, "response_time_ms": response_time_ms, "attempt": attempt })
            }
            Event::RequestRetrying { request_id, name, status_code, attempt, delay_ms } => {
                json!({ "type": "request.retrying", "request_id": request_id, "name": name, "status_code": status_code, "attempt": attempt, "delay_ms": delay_ms })
            }
            Event::RequestSkipped { request_id, name } => {
                json!({ "type": "request.skipped", "request_id": request_id, "name": name })
            }
            Event::ExecutionStopped { request_id, name } => {
                json!({ "type": "execution.stopped", "request_id": request_id, "name": name })
            }
            Event::ResultPersistFailed { request_id, error } => {
                json!({ "type": "result.persist_failed", "request_id": request_id, "error": error })
            }
        };
        println!("{}", serde_json::to_string(&json).unwrap_or_default());
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}
