use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use relay_core::types::{ExecutionMode, HttpMethod, Integration, Request, RetryConfig};
use relay_exec::executor::{
    Event, EventSink, HttpClient, HttpError, HttpRequest, HttpResponse, NoOpEventSink,
    NoTokenProvider,
};
use relay_exec::Executor;
use relay_store::{IntegrationStore, MemoryStore};

// Returns scripted statuses in call order and falls back to a fixed one,
// timestamping each call on the tokio clock.
struct TimedHttpClient {
    script: Mutex<Vec<u16>>,
    fallback: u16,
    calls: Mutex<Vec<Instant>>,
}

impl TimedHttpClient {
    fn new(script: Vec<u16>, fallback: u16) -> Self {
        Self {
            script: Mutex::new(script),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    async fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl HttpClient for TimedHttpClient {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.calls.lock().await.push(Instant::now());
        let mut script = self.script.lock().await;
        let status = if script.is_empty() { self.fallback } else { script.remove(0) };
        Ok(HttpResponse { status, body: "{}".to_string() })
    }
}

struct FlakyTransport {
    failures_left: Mutex<usize>,
    calls: Mutex<usize>,
}

#[async_trait]
impl HttpClient for FlakyTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
        *self.calls.lock().await += 1;
        let mut failures_left = self.failures_left.lock().await;
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err(HttpError::Network("connection refused".to_string()));
        }
        Ok(HttpResponse { status: 200, body: "{}".to_string() })
    }
}

struct RetryEventSink {
    delays: Mutex<Vec<u64>>,
}

#[async_trait]
impl EventSink for RetryEventSink {
    async fn emit(&self, event: Event) {
        if let Event::RequestRetrying { delay_ms, .. } = event {
            self.delays.lock().await.push(delay_ms);
        }
    }
}

fn retrying_request(retry: RetryConfig) -> Request {
    Request {
        id: "flaky".to_string(),
        name: "flaky".to_string(),
        method: HttpMethod::Get,
        url: "https://api.example.com/flaky".to_string(),
        headers: Default::default(),
        body: None,
        order: 1,
        retry_config: Some(retry),
        conditional_rules: Vec::new(),
        can_run_in_parallel: true,
        depends_on: Vec::new(),
    }
}

async fn store_with(request: Request) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put_integration(Integration {
            id: "int-1".to_string(),
            name: "int-1".to_string(),
            description: None,
            execution_mode: ExecutionMode::Sequential,
            authentication: None,
            requests: vec![request],
        })
        .await
        .unwrap();
    store
}

fn make_executor(
    store: Arc<MemoryStore>,
    http: Arc<dyn HttpClient>,
    events: Arc<dyn EventSink>,
) -> Executor {
    Executor::new(store.clone(), store, http, Arc::new(NoTokenProvider), events)
}

#[tokio::test(start_paused = true)]
async fn retries_stop_at_max_attempts() {
    let retry = RetryConfig { max_attempts: 3, ..Default::default() };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(TimedHttpClient::new(Vec::new(), 500));
    let executor = make_executor(store, http.clone(), Arc::new(NoOpEventSink));

    let results = executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    assert_eq!(http.call_times().await.len(), 3);
    assert_eq!(results[0].status_code, 500);
    assert_eq!(results[0].attempt_number, 3);
    assert!(results[0].is_retry);
}

#[tokio::test(start_paused = true)]
async fn exponential_backoff_doubles_between_attempts() {
    let retry = RetryConfig {
        max_attempts: 3,
        delay_ms: 1000,
        exponential_backoff: true,
        ..Default::default()
    };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(TimedHttpClient::new(Vec::new(), 500));
    let executor = make_executor(store, http.clone(), Arc::new(NoOpEventSink));

    executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    let calls = http.call_times().await;
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1] - calls[0], Duration::from_millis(1000));
    assert_eq!(calls[2] - calls[1], Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn fixed_delay_stays_constant() {
    let retry = RetryConfig {
        max_attempts: 3,
        delay_ms: 500,
        exponential_backoff: false,
        ..Default::default()
    };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(TimedHttpClient::new(Vec::new(), 503));
    let executor = make_executor(store, http.clone(), Arc::new(NoOpEventSink));

    executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    let calls = http.call_times().await;
    assert_eq!(calls[1] - calls[0], Duration::from_millis(500));
    assert_eq!(calls[2] - calls[1], Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn recovery_ends_the_retry_loop() {
    let retry = RetryConfig { max_attempts: 5, ..Default::default() };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(TimedHttpClient::new(vec![500], 200));
    let executor = make_executor(store, http.clone(), Arc::new(NoOpEventSink));

    let results = executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    assert_eq!(http.call_times().await.len(), 2);
    assert_eq!(results[0].status_code, 200);
    assert_eq!(results[0].attempt_number, 2);
    assert!(results[0].is_retry);
}

#[tokio::test(start_paused = true)]
async fn statuses_outside_the_list_are_final() {
    let retry = RetryConfig { max_attempts: 3, ..Default::default() };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(TimedHttpClient::new(vec![404], 200));
    let executor = make_executor(store, http.clone(), Arc::new(NoOpEventSink));

    let results = executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    assert_eq!(http.call_times().await.len(), 1);
    assert_eq!(results[0].status_code, 404);
    assert!(!results[0].is_retry);
}

#[tokio::test(start_paused = true)]
async fn transport_failures_are_retried() {
    let retry = RetryConfig { max_attempts: 3, ..Default::default() };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(FlakyTransport {
        failures_left: Mutex::new(2),
        calls: Mutex::new(0),
    });
    let executor = make_executor(store, http.clone(), Arc::new(NoOpEventSink));

    let results = executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    assert_eq!(*http.calls.lock().await, 3);
    assert_eq!(results[0].status_code, 200);
    assert_eq!(results[0].attempt_number, 3);
}

#[tokio::test(start_paused = true)]
async fn retrying_events_carry_the_planned_delay() {
    let retry = RetryConfig {
        max_attempts: 3,
        delay_ms: 1000,
        exponential_backoff: true,
        ..Default::default()
    };
    let store = store_with(retrying_request(retry)).await;
    let http = Arc::new(TimedHttpClient::new(Vec::new(), 502));
    let events = Arc::new(RetryEventSink { delays: Mutex::new(Vec::new()) });
    let executor = make_executor(store, http, events.clone());

    executor
        .execute_integration("int-1", HashMap::new())
        .await
        .unwrap();

    assert_eq!(*events.delays.lock().await, vec![1000, 2000]);
}
