//! In-memory state store.

use crate::error::StoreError;
use crate::store::StateStore;
use crate::types::StateData;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State kept only for the lifetime of the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<StateData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: StateData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> StateData {
        self.data.read().await.clone()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn is_enabled(&self, conversation_id: &str) -> Result<bool, StoreError> {
        Ok(self.data.read().await.is_enabled(conversation_id))
    }

    async fn enable(&self, conversation_id: &str) -> Result<bool, StoreError> {
        Ok(self.data.write().await.enable(conversation_id))
    }

    async fn disable(&self, conversation_id: &str) -> Result<bool, StoreError> {
        Ok(self.data.write().await.disable(conversation_id))
    }

    async fn quotes(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().await.quotes_stored.clone())
    }

    async fn pending(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().await.quotes_pending.clone())
    }

    async fn add_pending(&self, text: &str) -> Result<bool, StoreError> {
        Ok(self.data.write().await.add_pending(text))
    }

    async fn import_quotes(&self, quotes: Vec<String>) -> Result<usize, StoreError> {
        Ok(self.data.write().await.import_quotes(quotes))
    }
}
