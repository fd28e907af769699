use crate::types::Request;
use crate::validate::validator::Validator;

pub(crate) fn validate_request(v: &mut Validator, request: &Request, path: &str) {
    if request.name.trim().is_empty() {
        v.push(format!("{path}.name"), "must not be empty");
    }

    if request.url.trim().is_empty() {
        v.push(format!("{path}.url"), "must not be empty");
    } else if !request.url.contains("{{") {
        // Templated URLs can only be checked after placeholder resolution.
        if let Err(e) = url::Url::parse(&request.url) {
            v.push(format!("{path}.url"), format!("must be an absolute URL: {e}"));
        }
    }

    if request.body.is_some() && !request.method.carries_body() {
        v.push(
            format!("{path}.body"),
            format!("is never sent with method {}", request.method.as_str()),
        );
    }

    if let Some(retry) = &request.retry_config {
        if retry.max_attempts < 1 {
            v.push(format!("{path}.retryConfig.maxAttempts"), "must be at least 1");
        }
        for (idx, code) in retry.retry_on_status_codes.iter().enumerate() {
            if !(100..=599).contains(code) {
                v.push(
                    format!("{path}.retryConfig.retryOnStatusCodes[{idx}]"),
                    "must be an HTTP status code (100-599)",
                );
            }
        }
    }

    for (idx, rule) in request.conditional_rules.iter().enumerate() {
        if rule.condition.trim().is_empty() {
            v.push(
                format!("{path}.conditionalRules[{idx}].condition"),
                "must not be empty",
            );
        }
    }
}
