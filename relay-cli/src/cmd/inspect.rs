use std::path::Path;

use relay_core::{parse_integration_str, Validate};
use serde::Serialize;

use crate::args::FormatArgs;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct RequestInfo {
    order: u32,
    name: String,
    method: String,
    url: String,
    retries: bool,
    rules: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

#[derive(Serialize)]
struct InspectResult {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    mode: String,
    auth: String,
    requests: Vec<RequestInfo>,
}

pub async fn inspect_cmd(path: &Path, format: FormatArgs, output: OutputArgs) -> i32 {
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
        print_error(output.output, output.quiet, "validation failed");
        if output.output == OutputFormat::Text && !output.quiet {
            for v in &err.violations {
                eprintln!("- {}: {}", v.path, v.message);
            }
        }
        return exit_codes::VALIDATION_FAILED;
    }

    let requests: Vec<RequestInfo> = integration
        .requests_in_order()
        .into_iter()
        .map(|r| RequestInfo {
            order: r.order,
            name: r.name.clone(),
            method: r.method.as_str().to_string(),
            url: r.url.clone(),
            retries: r.retry_config.is_some(),
            rules: r.conditional_rules.len(),
            depends_on: r.depends_on.clone(),
        })
        .collect();

    let result = InspectResult {
        id: integration.id.clone(),
        name: integration.name.clone(),
        description: integration.description.clone(),
        mode: integration.execution_mode.as_str().to_string(),
        auth: integration
            .authentication
            .as_ref()
            .map(|a| a.scheme().to_string())
            .unwrap_or_else(|| "None".to_string()),
        requests,
    };

    if output.output == OutputFormat::Text && !output.quiet {
        println!("Integration: {} ({})", result.name, result.id);
        if let Some(description) = &result.description {
            println!("{description}");
        }
        println!("Mode: {}", result.mode);
        println!("Auth: {}", result.auth);
        println!("\nRequests:");
        for r in &result.requests {
            let mut line = format!("  {}. {} {} {}", r.order, r.name, r.method, r.url);
            if r.retries {
                line.push_str(" [retry]");
            }
            if r.rules > 0 {
                line.push_str(&format!(" [rules: {}]", r.rules));
            }
            if !r.depends_on.is_empty() {
                line.push_str(&format!(" (after: {})", r.depends_on.join(", ")));
            }
            println!("{line}");
        }
    } else {
        print_result(output.output, output.quiet, &result);
    }

    exit_codes::SUCCESS
}
