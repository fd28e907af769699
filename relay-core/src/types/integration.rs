use crate::types::{Authentication, Request};

/// A named, ordered collection of HTTP request definitions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Integration {
    #[serde(default = "crate::types::generated_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The document's preferred mode; callers may override it per execution.
    #[serde(default)]
    #[serde(rename = "executionMode")]
    pub execution_mode: ExecutionMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,

    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Integration {
    /// Requests sorted by ascending `order`, the default execution sequence.
    pub fn requests_in_order(&self) -> Vec<&Request> {
        let mut ordered: Vec<&Request> = self.requests.iter().collect();
        ordered.sort_by_key(|r| r.order);
        ordered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
    Conditional,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "Sequential",
            ExecutionMode::Parallel => "Parallel",
            ExecutionMode::Conditional => "Conditional",
        }
    }
}
