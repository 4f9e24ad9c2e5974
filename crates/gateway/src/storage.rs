//! Persistence collaborator contract.
//!
//! The gateway hands every completed transaction to a [`TransactionStore`]
//! and never touches it again: the contract is append-only creation, no
//! update or delete. Real storage engines live outside this crate;
//! [`MemoryStore`] is for tests and demos.

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use payflow_types::TransactionResult;

/// A persistence failure, surfaced verbatim from the collaborator.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Append-only audit storage for transaction results.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Create a new audit record. Called exactly once per completed
    /// transaction; implementations must not deduplicate or overwrite.
    async fn create(&self, record: &TransactionResult) -> Result<(), StoreError>;
}

/// In-memory [`TransactionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TransactionResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records created so far, in creation order.
    pub fn records(&self) -> Vec<TransactionResult> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn create(&self, record: &TransactionResult) -> Result<(), StoreError> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}
