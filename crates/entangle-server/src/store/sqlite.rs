//! SQLite status-check storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::task;

use super::{StatusCheck, StatusStore, StoreError, StoreResult};

/// SQLite-backed status-check log.
///
/// A single connection behind a mutex; every query runs on the blocking pool.
#[derive(Clone)]
pub struct SqliteStatusStore {
    /// `None` once closed.
    connection: Arc<Mutex<Option<Connection>>>,
}

impl SqliteStatusStore {
    /// Open (or create) a database file and apply the schema.
    ///
    /// Blocks; call before the runtime is busy or inside `spawn_blocking`.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Private in-memory database, mainly for tests.
    pub fn in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS status_checks (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                client_name TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            connection: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// Run `f` against the open connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
    {
        let conn = self.connection.clone();
        task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StoreError::Backend("database lock poisoned".into()))?;
            let conn = guard.as_ref().ok_or(StoreError::Closed)?;
            f(conn)
        })
        .await
        .map_err(|e| StoreError::Backend(format!("storage task failed: {e}")))?
    }
}

#[async_trait]
impl StatusStore for SqliteStatusStore {
    async fn insert(&self, check: &StatusCheck) -> StoreResult<()> {
        let check = check.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
                params![check.id, check.client_name, check.timestamp.to_rfc3339()],
            )?;
            Ok(())
        })
        .await
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<StatusCheck>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, client_name, timestamp FROM status_checks ORDER BY seq LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?;

            let mut checks = Vec::new();
            for row in rows {
                let (id, client_name, timestamp) = row?;
                let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                    .map_err(|e| StoreError::Backend(format!("bad timestamp {timestamp:?}: {e}")))?
                    .with_timezone(&Utc);
                checks.push(StatusCheck {
                    id,
                    client_name,
                    timestamp,
                });
            }
            Ok(checks)
        })
        .await
    }

    async fn close(&self) -> StoreResult<()> {
        let conn = self.connection.clone();
        task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StoreError::Backend("database lock poisoned".into()))?;
            if let Some(conn) = guard.take() {
                conn.close().map_err(|(_, e)| StoreError::from(e))?;
            }
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Backend(format!("storage task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_preserves_order_and_timestamp() {
        let store = SqliteStatusStore::in_memory().unwrap();
        let first = StatusCheck::new("first");
        let second = StatusCheck::new("second");
        store.insert(&first).await.unwrap();
        store.insert(&second).await.unwrap();

        let listed = store.list(10).await.unwrap();
        assert_eq!(listed, vec![first, second]);
        assert_eq!(store.list(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_close_is_final() {
        let store = SqliteStatusStore::in_memory().unwrap();
        store.close().await.unwrap();
        assert!(matches!(store.list(1).await, Err(StoreError::Closed)));
        // Closing twice is harmless.
        store.close().await.unwrap();
    }
}
