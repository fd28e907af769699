use std::collections::HashMap;
use std::sync::Arc;

use futures_util::stream::FuturesUnordered;
use futures_util::StreamExt;

use relay_core::types::{
    ExecutionConfig, ExecutionMode, Integration, Request, RequestResult, RetryConfig, RuleAction,
};
use relay_store::{IntegrationStore, ResultStore};

use crate::executor::attempt::execute_attempt;
use crate::executor::auth::{apply_authentication, TokenProvider};
use crate::executor::concurrency::AdmissionGate;
use crate::executor::conditions;
use crate::executor::error::ExecutionError;
use crate::executor::events::{Event, EventSink};
use crate::executor::http::HttpClient;
use crate::retry::{backoff_delay, effective_config, should_retry};

pub struct Executor {
    store: Arc<dyn IntegrationStore>,
    results: Arc<dyn ResultStore>,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    events: Arc<dyn EventSink>,
}

impl Executor {
    pub fn new(
        store: Arc<dyn IntegrationStore>,
        results: Arc<dyn ResultStore>,
        http: Arc<dyn HttpClient>,
        tokens: Arc<dyn TokenProvider>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self { store, results, http, tokens, events }
    }

    /// Executes a single stored request outside any integration flow.
    ///
    /// No authentication is applied and no prior results are visible;
    /// retries follow the request's own retry configuration.
    pub async fn execute_request(
        &self,
        request_id: &str,
        placeholders: HashMap<String, String>,
    ) -> Result<RequestResult, ExecutionError> {
        let request = self
            .store
            .get_request(request_id)
            .await?
            .ok_or_else(|| ExecutionError::RequestNotFound(request_id.to_string()))?;
        let config = ExecutionConfig { placeholders, ..Default::default() };
        Ok(self.execute_with_retries(&request, &config, &[], None).await)
    }

    /// Executes a stored integration sequentially with default settings.
    ///
    /// The mode declared on the document is not consulted; callers pick a
    /// mode through [`Self::execute_integration_with_config`].
    pub async fn execute_integration(
        &self,
        integration_id: &str,
        placeholders: HashMap<String, String>,
    ) -> Result<Vec<RequestResult>, ExecutionError> {
        let integration = self
            .store
            .get_integration(integration_id)
            .await?
            .ok_or_else(|| ExecutionError::IntegrationNotFound(integration_id.to_string()))?;
        let config = ExecutionConfig { placeholders, ..Default::default() };
        self.run_integration(integration, config).await
    }

    /// Executes a stored integration under caller-supplied settings. The
    /// config's mode wins over the mode declared on the document.
    pub async fn execute_integration_with_config(
        &self,
        integration_id: &str,
        config: ExecutionConfig,
    ) -> Result<Vec<RequestResult>, ExecutionError> {
        let integration = self
            .store
            .get_integration(integration_id)
            .await?
            .ok_or_else(|| ExecutionError::IntegrationNotFound(integration_id.to_string()))?;
        self.run_integration(integration, config).await
    }

    async fn run_integration(
        &self,
        integration: Integration,
        mut config: ExecutionConfig,
    ) -> Result<Vec<RequestResult>, ExecutionError> {
        apply_authentication(&integration, self.tokens.as_ref(), &mut config.placeholders).await;

        self.events
            .emit(Event::IntegrationStarted {
                integration_id: integration.id.clone(),
                name: integration.name.clone(),
                mode: config.mode,
                requests: integration.requests.len(),
            })
            .await;

        let results = match config.mode {
            ExecutionMode::Sequential => self.run_sequential(&integration, &config).await,
            ExecutionMode::Parallel => self.run_parallel(&integration, &config).await,
            ExecutionMode::Conditional => self.run_conditional(&integration, &config).await,
        };

        self.events
            .emit(Event::IntegrationCompleted {
                integration_id: integration.id.clone(),
                name: integration.name.clone(),
                results: results.len(),
            })
            .await;

        Ok(results)
    }

    async fn run_sequential(
        &self,
        integration: &Integration,
        config: &ExecutionConfig,
    ) -> Vec<RequestResult> {
        let mut results = Vec::with_capacity(integration.requests.len());
        for request in integration.requests_in_order() {
            let result = self.run_one(request, config, &results).await;
            results.push(result);
        }
        results
    }

    async fn run_parallel(
        &self,
        integration: &Integration,
        config: &ExecutionConfig,
    ) -> Vec<RequestResult> {
        let (independent, mut dependent): (Vec<&Request>, Vec<&Request>) = integration
            .requests
            .iter()
            .partition(|request| request.is_independent());

        let gate = AdmissionGate::new(config.max_parallel_requests);
        let mut results = Vec::with_capacity(integration.requests.len());

        // Independent requests run concurrently and land in completion
        // order. They see no prior results.
        let mut in_flight = FuturesUnordered::new();
        for request in independent {
            let gate = &gate;
            in_flight.push(async move {
                let _permit = gate.admit().await;
                self.run_one(request, config, &[]).await
            });
        }
        while let Some(result) = in_flight.next().await {
            results.push(result);
        }

        // Dependent requests run sequentially afterwards and may reference
        // everything that completed before them.
        dependent.sort_by_key(|request| request.order);
        for request in dependent {
            let result = self.run_one(request, config, &results).await;
            results.push(result);
        }

        results
    }

    async fn run_conditional(
        &self,
        integration: &Integration,
        config: &ExecutionConfig,
    ) -> Vec<RequestResult> {
        let mut results = Vec::new();
        for request in integration.requests_in_order() {
            if !conditions::should_execute(request, results.last()) {
                self.events
                    .emit(Event::RequestSkipped {
                        request_id: request.id.clone(),
                        name: request.name.clone(),
                    })
                    .await;
                continue;
            }

            let result = self.run_one(request, config, &results).await;
            let action = conditions::decide_action(request, &result);
            results.push(result);

            if action == RuleAction::Stop {
                self.events
                    .emit(Event::ExecutionStopped {
                        request_id: request.id.clone(),
                        name: request.name.clone(),
                    })
                    .await;
                break;
            }
        }
        results
    }

    async fn run_one(
        &self,
        request: &Request,
        config: &ExecutionConfig,
        prior: &[RequestResult],
    ) -> RequestResult {
        if config.enable_retries {
            self.execute_with_retries(request, config, prior, None).await
        } else {
            self.execute_once(request, config, prior, 1).await
        }
    }

    async fn execute_with_retries(
        &self,
        request: &Request,
        config: &ExecutionConfig,
        prior: &[RequestResult],
        override_retry: Option<&RetryConfig>,
    ) -> RequestResult {
        let policy = effective_config(override_retry, request.retry_config.as_ref());
        let mut attempt = 1;
        loop {
            let result = self.execute_once(request, config, prior, attempt).await;
            if attempt < policy.max_attempts && should_retry(&result, &policy) {
                let delay = backoff_delay(&policy, attempt);
                self.events
                    .emit(Event::RequestRetrying {
                        request_id: request.id.clone(),
                        name: request.name.clone(),
                        status_code: result.status_code,
                        attempt,
                        delay_ms: delay.as_millis() as u64,
                    })
                    .await;
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }
            return result;
        }
    }

    async fn execute_once(
        &self,
        request: &Request,
        config: &ExecutionConfig,
        prior: &[RequestResult],
        attempt: u32,
    ) -> RequestResult {
        execute_attempt(
            self.http.as_ref(),
            self.results.as_ref(),
            self.events.as_ref(),
            request,
            config,
            prior,
            attempt,
        )
        .await
    }
}
