#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("store error: {0}")]
    Store(#[from] relay_store::StoreError),
    #[error("integration not found: {0}")]
    IntegrationNotFound(String),
    #[error("request not found: {0}")]
    RequestNotFound(String),
}
