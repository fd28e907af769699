use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use relay_core::types::{Integration, Request, RequestResult};

use crate::store::trait_store::{IntegrationStore, ResultStore, StoreError};

/// In-memory implementation of both store traits.
///
/// Definitions and results live in process memory and vanish with the
/// store. This is the backend the CLI and the test suites run on.
#[derive(Default)]
pub struct MemoryStore {
    integrations: RwLock<HashMap<String, Integration>>,
    results: RwLock<Vec<RequestResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored result in append order, across all requests.
    pub async fn all_results(&self) -> Vec<RequestResult> {
        self.results.read().await.clone()
    }
}

#[async_trait]
impl IntegrationStore for MemoryStore {
    async fn get_integration(&self, id: &str) -> Result<Option<Integration>, StoreError> {
        Ok(self.integrations.read().await.get(id).cloned())
    }

    async fn get_request(&self, id: &str) -> Result<Option<Request>, StoreError> {
        let integrations = self.integrations.read().await;
        Ok(integrations
            .values()
            .flat_map(|i| i.requests.iter())
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_integrations(&self) -> Result<Vec<Integration>, StoreError> {
        Ok(self.integrations.read().await.values().cloned().collect())
    }

    async fn put_integration(&self, integration: Integration) -> Result<(), StoreError> {
        self.integrations
            .write()
            .await
            .insert(integration.id.clone(), integration);
        Ok(())
    }

    async fn delete_integration(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.integrations.write().await.remove(id).is_some())
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn append_result(&self, result: &RequestResult) -> Result<(), StoreError> {
        self.results.write().await.push(result.clone());
        Ok(())
    }

    async fn results_for_request(
        &self,
        request_id: &str,
    ) -> Result<Vec<RequestResult>, StoreError> {
        let results = self.results.read().await;
        Ok(results
            .iter()
            .filter(|r| r.request_id == request_id)
            .rev()
            .cloned()
            .collect())
    }
}
