// SPDX-License-Identifier: Apache-2.0

use crate::{apply_migrations, StoreError, StoreResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

pub const MEMORY_URL: &str = ":memory:";

/// Shared handle to the noteful SQLite database. Cloning is cheap; all clones
/// serialize on the same connection.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.busy_timeout(Duration::from_secs(5))?;
        debug!(path = %path.as_ref().display(), "opened sqlite database");
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    /// Accepts a bare path, `sqlite://path`, or `:memory:`.
    pub fn open_url(url: &str) -> StoreResult<Self> {
        let path = url.strip_prefix("sqlite://").unwrap_or(url);
        if path == MEMORY_URL {
            Self::open_in_memory()
        } else {
            Self::open(path)
        }
    }

    fn bootstrap(mut conn: Connection) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection on the blocking pool.
    pub async fn call<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&mut guard).map_err(StoreError::from)
        })
        .await
        .map_err(|e| StoreError::Blocking(e.to_string()))?
    }
}
