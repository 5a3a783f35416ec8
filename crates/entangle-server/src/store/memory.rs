//! In-memory status-check storage (no persistence).

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{StatusCheck, StatusStore, StoreError, StoreResult};

/// In-memory status-check log.
#[derive(Clone)]
pub struct MemoryStatusStore {
    /// `None` once closed.
    checks: Arc<RwLock<Option<Vec<StatusCheck>>>>,
}

impl MemoryStatusStore {
    /// Create an empty, open store.
    pub fn new() -> Self {
        Self {
            checks: Arc::new(RwLock::new(Some(Vec::new()))),
        }
    }
}

impl Default for MemoryStatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn insert(&self, check: &StatusCheck) -> StoreResult<()> {
        let mut checks = self.checks.write().await;
        checks
            .as_mut()
            .ok_or(StoreError::Closed)?
            .push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<StatusCheck>> {
        let checks = self.checks.read().await;
        let checks = checks.as_ref().ok_or(StoreError::Closed)?;
        Ok(checks.iter().take(limit).cloned().collect())
    }

    async fn close(&self) -> StoreResult<()> {
        self.checks.write().await.take();
        Ok(())
    }
}
