use async_trait::async_trait;

use relay_core::types::{Integration, Request, RequestResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store error: {0}")]
    Other(String),
}

/// Read/write access to integration definitions.
#[async_trait]
pub trait IntegrationStore: Send + Sync {
    async fn get_integration(&self, id: &str) -> Result<Option<Integration>, StoreError>;

    /// Look a request up by id across all stored integrations.
    async fn get_request(&self, id: &str) -> Result<Option<Request>, StoreError>;

    async fn list_integrations(&self) -> Result<Vec<Integration>, StoreError>;

    /// Insert or replace by id.
    async fn put_integration(&self, integration: Integration) -> Result<(), StoreError>;

    /// Returns whether an integration with that id existed.
    async fn delete_integration(&self, id: &str) -> Result<bool, StoreError>;
}

/// Append-only record of execution results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn append_result(&self, result: &RequestResult) -> Result<(), StoreError>;

    /// Results for one request, newest first.
    async fn results_for_request(
        &self,
        request_id: &str,
    ) -> Result<Vec<RequestResult>, StoreError>;
}
