use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use relay_core::types::ExecutionConfig;
use relay_core::{parse_integration_str, Validate};
use relay_exec::executor::{
    EventSink, ExecutionError, NoOpEventSink, ReqwestHttpClient, StdoutEventSink, TokenProvider,
};
use relay_exec::Executor;
use relay_store::{IntegrationStore, MemoryStore};

use crate::args::{FormatArgs, ModeArg};
use crate::exit_codes;
use crate::output::{print_error, OutputFormat};
use crate::OutputArgs;

/// Resolves OAuth2 access tokens from the environment:
/// `RELAY_OAUTH_TOKEN_<ID>` (integration id uppercased, `-` mapped to `_`),
/// falling back to the plain `RELAY_OAUTH_TOKEN`.
struct EnvTokenProvider;

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn valid_access_token(&self, integration_id: &str) -> Option<String> {
        let suffix = integration_id.to_uppercase().replace('-', "_");
        std::env::var(format!("RELAY_OAUTH_TOKEN_{suffix}"))
            .or_else(|_| std::env::var("RELAY_OAUTH_TOKEN"))
            .ok()
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn execute_cmd(
    path: &Path,
    mode: Option<ModeArg>,
    set_values: &[String],
    request_ref: Option<&str>,
    max_parallel: Option<usize>,
    timeout_ms: Option<u64>,
    no_retries: bool,
    stop_on_first_error: bool,
    format: FormatArgs,
    output: OutputArgs,
) -> i32 {
    let content = match std::fs::read_to_string(path) {
        Ok(v) => v,
        Err(e) => {
            print_error(
                output.output,
                output.quiet,
                &format!("failed to read {}: {e}", path.display()),
            );
            return exit_codes::VALIDATION_FAILED;
        }
    };

    let parsed = match parse_integration_str(&content, format.format.into()) {
        Ok(p) => p,
        Err(e) => {
            print_error(output.output, output.quiet, &format!("{e}"));
            return exit_codes::VALIDATION_FAILED;
        }
    };

    let integration = parsed.integration;
    if let Err(err) = integration.validate() {
        if output.output == OutputFormat::Text && !output.quiet {
            eprintln!("error: validation failed");
            for v in &err.violations {
                eprintln!("- {}: {}", v.path, v.message);
            }
        } else {
            print_error(output.output, output.quiet, "validation failed");
        }
        return exit_codes::VALIDATION_FAILED;
    }

    let mut placeholders = HashMap::new();
    for raw in set_values {
        match raw.split_once('=') {
            Some((key, value)) => {
                placeholders.insert(key.to_string(), value.to_string());
            }
            None => {
                print_error(
                    output.output,
                    output.quiet,
                    &format!("invalid --set value: {raw} (expected KEY=VALUE)"),
                );
                return exit_codes::RUNTIME_ERROR;
            }
        }
    }

    let integration_id = integration.id.clone();
    let document_mode = integration.execution_mode;
    // --request accepts a name or an id; unknown values pass through so the
    // executor reports the lookup failure.
    let single_request_id = request_ref.map(|needle| {
        integration
            .requests
            .iter()
            .find(|r| r.id == needle || r.name == needle)
            .map(|r| r.id.clone())
            .unwrap_or_else(|| needle.to_string())
    });

    let store = Arc::new(MemoryStore::new());
    if let Err(e) = store.put_integration(integration).await {
        print_error(
            output.output,
            output.quiet,
            &format!("failed to store integration: {e}"),
        );
        return exit_codes::RUNTIME_ERROR;
    }

    let event_sink: Arc<dyn EventSink> = if output.quiet {
        Arc::new(NoOpEventSink)
    } else {
        Arc::new(StdoutEventSink)
    };

    let executor = Executor::new(
        store.clone(),
        store,
        Arc::new(ReqwestHttpClient::default()),
        Arc::new(EnvTokenProvider),
        event_sink,
    );

    let mut config = ExecutionConfig {
        placeholders,
        mode: mode.map(Into::into).unwrap_or(document_mode),
        stop_on_first_error,
        enable_retries: !no_retries,
        ..Default::default()
    };
    if let Some(n) = max_parallel {
        config.max_parallel_requests = n;
    }
    if let Some(t) = timeout_ms {
        config.timeout_ms = t;
    }

    let outcome = match single_request_id {
        Some(request_id) => executor
            .execute_request(&request_id, config.placeholders.clone())
            .await
            .map(|result| vec![result]),
        None => {
            executor
                .execute_integration_with_config(&integration_id, config)
                .await
        }
    };

    let results = match outcome {
        Ok(results) => results,
        Err(e @ ExecutionError::Store(_)) => {
            print_error(output.output, output.quiet, &format!("{e}"));
            return exit_codes::RUNTIME_ERROR;
        }
        Err(e) => {
            print_error(output.output, output.quiet, &format!("{e}"));
            return exit_codes::EXECUTION_FAILED;
        }
    };

    // Results print even under --quiet; quiet only silences the event stream.
    let failed = results.iter().filter(|r| r.is_failure()).count();
    match output.output {
        OutputFormat::Text => {
            for r in &results {
                let status = if r.is_failure() { "FAIL" } else { "ok" };
                let mut line = format!(
                    "{status:>4}  {} [{}] {} ms (attempt {})",
                    r.request_name, r.status_code, r.response_time_ms, r.attempt_number
                );
                if let Some(error) = &r.error {
                    line.push_str(&format!(" error: {error}"));
                }
                println!("{line}");
            }
            println!("{} requests, {failed} failed", results.len());
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&results) {
                println!("{json}");
            }
        }
    }

    if failed > 0 {
        exit_codes::EXECUTION_FAILED
    } else {
        exit_codes::SUCCESS
    }
}
