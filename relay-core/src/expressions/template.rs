use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::path::{extract, value_text};
use crate::types::RequestResult;

/// Matches `{{$...}}` result-reference tokens. Scanned after the plain
/// placeholder pass so caller-supplied values never shadow references.
static RESULT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\$[^}]*)\}\}").expect("valid"));

/// Splits an indexed reference `$[N].path` into its index and path parts.
static INDEXED_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\[(\d+)\]\.(.*)$").expect("valid"));

/// Resolve `{{name}}` and `{{$...}}` tokens in a template.
///
/// Pass one replaces every `{{key}}` with its value from `placeholders`
/// (literal substring match). Pass two resolves result references:
/// `{{$[N].path}}` extracts `path` from the response body of `prior[N]`,
/// and `{{$.path}}` is shorthand for index 0. Callers order `prior` so
/// that index 0 is the most recent completed result. Tokens that do not
/// resolve are left in place; this function never fails.
pub fn resolve(
    template: &str,
    placeholders: &HashMap<String, String>,
    prior: &[&RequestResult],
) -> String {
    if template.is_empty() {
        return String::new();
    }

    let mut resolved = template.to_string();
    for (key, value) in placeholders {
        resolved = resolved.replace(&format!("{{{{{key}}}}}"), value);
    }

    RESULT_TOKEN_RE
        .replace_all(&resolved, |caps: &regex::Captures<'_>| {
            match resolve_reference(&caps[1], prior) {
                Some(text) => text,
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn resolve_reference(reference: &str, prior: &[&RequestResult]) -> Option<String> {
    let (index, path) = match INDEXED_REF_RE.captures(reference) {
        Some(caps) => (caps[1].parse().ok()?, format!("$.{}", &caps[2])),
        None => (0, reference.to_string()),
    };

    let body = prior.get(index)?.response.as_deref()?;
    extract(body, &path).map(|v| value_text(&v))
}
