mod auth;
mod conditional;
mod config;
mod integration;
mod request;
mod result;
mod retry;

pub use auth::Authentication;
pub use conditional::{ConditionOperator, ConditionalRule, RuleAction};
pub use config::ExecutionConfig;
pub use integration::{ExecutionMode, Integration};
pub use request::{HttpMethod, Request};
pub use result::RequestResult;
pub use retry::RetryConfig;

pub(crate) fn generated_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
