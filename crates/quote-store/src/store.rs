//! The state store contract used by the dispatcher.

use crate::error::StoreError;
use async_trait::async_trait;

/// Per-conversation enablement and the quote collections.
///
/// Every mutation is a read-modify-write performed atomically by the
/// implementation, so callers never write back a value they read earlier.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn is_enabled(&self, conversation_id: &str) -> Result<bool, StoreError>;

    /// Idempotent. Returns true if membership changed.
    async fn enable(&self, conversation_id: &str) -> Result<bool, StoreError>;

    /// Idempotent. Returns true if membership changed.
    async fn disable(&self, conversation_id: &str) -> Result<bool, StoreError>;

    async fn quotes(&self) -> Result<Vec<String>, StoreError>;

    async fn pending(&self) -> Result<Vec<String>, StoreError>;

    /// Returns true iff the text was not already pending.
    async fn add_pending(&self, text: &str) -> Result<bool, StoreError>;

    /// Append stored quotes not already present. Returns how many were added.
    async fn import_quotes(&self, quotes: Vec<String>) -> Result<usize, StoreError>;
}
