use std::time::{Duration, Instant};

use chrono::Utc;
use uuid::Uuid;

use relay_core::expressions::resolve;
use relay_core::types::{ExecutionConfig, Request, RequestResult};
use relay_store::ResultStore;

use crate::executor::events::{Event, EventSink};
use crate::executor::http::{HttpClient, HttpRequest};

/// Runs one HTTP attempt for a request and records the outcome.
///
/// Always produces a result: a transport failure becomes a result with
/// status code 0 rather than an error return.
pub(crate) async fn execute_attempt(
    http: &dyn HttpClient,
    results: &dyn ResultStore,
    events: &dyn EventSink,
    request: &Request,
    config: &ExecutionConfig,
    prior: &[RequestResult],
    attempt: u32,
) -> RequestResult {
    // Index 0 addresses the most recently completed result.
    let view: Vec<&RequestResult> = prior.iter().rev().collect();

    let url = resolve(&request.url, &config.placeholders, &view);
    let mut headers: Vec<(String, String)> = request
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), resolve(value, &config.placeholders, &view)))
        .collect();
    let body = match &request.body {
        Some(body) if request.method.carries_body() && !body.is_empty() => {
            Some(resolve(body, &config.placeholders, &view))
        }
        _ => None,
    };
    if body.is_some() && !has_content_type(&headers) {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }

    events
        .emit(Event::RequestStarted {
            request_id: request.id.clone(),
            name: request.name.clone(),
            attempt,
        })
        .await;

    let started = Instant::now();
    let outcome = http
        .send(HttpRequest {
            method: request.method,
            url,
            headers,
            body,
            timeout: Duration::from_millis(config.timeout_ms),
        })
        .await;
    let response_time_ms = started.elapsed().as_millis() as u64;

    let result = match outcome {
        Ok(response) => RequestResult {
            id: Uuid::new_v4().to_string(),
            request_id: request.id.clone(),
            request_name: request.name.clone(),
            status_code: response.status,
            response_time_ms,
            response: Some(response.body),
            error: None,
            attempt_number: attempt,
            is_retry: attempt > 1,
            executed_at: Utc::now(),
        },
        Err(e) => {
            let message = e.to_string();
            // Status 0 marks a transport failure. The synthesized body keeps
            // the error visible to conditional rules and result references.
            RequestResult {
                id: Uuid::new_v4().to_string(),
                request_id: request.id.clone(),
                request_name: request.name.clone(),
                status_code: 0,
                response_time_ms,
                response: Some(serde_json::json!({ "error": message }).to_string()),
                error: Some(message),
                attempt_number: attempt,
                is_retry: attempt > 1,
                executed_at: Utc::now(),
            }
        }
    };

    events
        .emit(Event::RequestCompleted {
            request_id: request.id.clone(),
            name: request.name.clone(),
            status_code: result.status_code,
            response_time_ms: result.response_time_ms,
            attempt,
        })
        .await;

    // Persistence failures do not abort the run; the caller still gets
    // the in-memory result.
    if let Err(e) = results.append_result(&result).await {
        events
            .emit(Event::ResultPersistFailed {
                request_id: request.id.clone(),
                error: e.to_string(),
            })
            .await;
    }

    result
}

fn has_content_type(headers: &[(String, String)]) -> bool {
    headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
}
