use indexmap::IndexMap;

use crate::types::{ConditionalRule, RetryConfig};

/// The definition of one HTTP call within an integration.
///
/// URL, header values, and body are templates: they may contain `{{name}}`
/// placeholders that are resolved at execution time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    #[serde(default = "crate::types::generated_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub method: HttpMethod,

    pub url: String,

    /// Insertion order is preserved and is the order headers are sent in.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Position in the default sequential execution order.
    #[serde(default)]
    pub order: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "retryConfig")]
    pub retry_config: Option<RetryConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(rename = "conditionalRules")]
    pub conditional_rules: Vec<ConditionalRule>,

    #[serde(default = "crate::types::default_true")]
    #[serde(rename = "canRunInParallel")]
    pub can_run_in_parallel: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(rename = "dependsOn")]
    pub depends_on: Vec<String>,
}

impl Request {
    /// A request is independent when nothing orders it after another request.
    pub fn is_independent(&self) -> bool {
        self.depends_on.is_empty() && self.can_run_in_parallel
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Only these methods carry a request body; others drop it silently.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}
