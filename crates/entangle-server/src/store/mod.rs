//! Status-check log.
//!
//! Clients post a name to `/api/status` and get back a timestamped record; the
//! log is listed in insertion order. Backends:
//!
//! - `MemoryStatusStore`: in-memory (lost on restart)
//! - `SqliteStatusStore`: `SQLite` file or in-memory database (feature `sqlite`)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::MemoryStatusStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStatusStore;

/// One recorded status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// New check with a fresh v4 id, stamped now.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store is closed")]
    Closed,

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for status-check storage backends.
///
/// Opened once at process start, shared through application state, and closed
/// after the server has drained.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Append a check.
    async fn insert(&self, check: &StatusCheck) -> StoreResult<()>;

    /// Oldest-first list of at most `limit` checks.
    async fn list(&self, limit: usize) -> StoreResult<Vec<StatusCheck>>;

    /// Release the backend. Later calls fail with [`StoreError::Closed`].
    async fn close(&self) -> StoreResult<()>;
}
