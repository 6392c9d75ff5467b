//! SQLite-backed pair store.
//!
//! A single connection behind a mutex; every call runs on the blocking pool.


use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info, instrument};

use super::{CacheEntry, PairStore, StorageError, StorageResult};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS word_cache (
        id INTEGER PRIMARY KEY,
        first_word TEXT,
        second_word TEXT,
        result TEXT,
        emoji TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_word_cache_pair ON word_cache(first_word, second_word);
"#;

const SELECT_PAIR: &str =
    "SELECT first_word, second_word, result, emoji FROM word_cache WHERE first_word = ?1 AND second_word = ?2 AND result <> '' ORDER BY id LIMIT 1";

const INSERT_PAIR: &str =
    "INSERT INTO word_cache (first_word, second_word, result, emoji) VALUES (?1, ?2, ?3, ?4)";

/// Shared handle to the on-disk cache database.
///
/// Cloning is cheap; all clones share one connection. After [`close`](Self::close)
/// every operation fails with [`StorageError::Closed`].
#[derive(Clone)]
pub struct SqlitePairStore {
    conn: Arc<Mutex<Option<Connection>>>,
    path: PathBuf,
}

impl SqlitePairStore {
    /// Opens (or creates) the database at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        conn.execute_batch(SCHEMA)?;

        info!(path = %path.display(), "Opened pair store");

        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            path,
        })
    }

    /// Opens a private in-memory database with the same schema.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows, duplicates included.
    pub async fn count(&self) -> StorageResult<u64> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM word_cache", [], |row| row.get(0))?;
            Ok(n as u64)
        })
        .await
    }

    /// Closes the connection. Later calls on any clone return [`StorageError::Closed`].
    pub fn close(&self) -> StorageResult<()> {
        let Some(conn) = self.conn.lock().take() else {
            return Ok(());
        };

        conn.close().map_err(|(_, e)| StorageError::Sqlite(e))?;
        info!(path = %self.path.display(), "Closed pair store");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.conn.lock().is_none()
    }

    async fn with_conn<T, F>(&self, f: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> StorageResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock();
            let conn = guard.as_ref().ok_or(StorageError::Closed)?;
            f(conn)
        })
        .await
        .map_err(|e| StorageError::TaskFailed(e.to_string()))?
    }
}

impl PairStore for SqlitePairStore {
    #[instrument(skip(self))]
    async fn get(&self, first: &str, second: &str) -> StorageResult<Option<CacheEntry>> {
        let first = first.to_string();
        let second = second.to_string();

        let entry = self
            .with_conn(move |conn| {
                let row = conn
                    .query_row(SELECT_PAIR, params![first, second], |row| {
                        Ok(CacheEntry {
                            first_word: row.get(0)?,
                            second_word: row.get(1)?,
                            result: row.get(2)?,
                            emoji: row.get(3)?,
                        })
                    })
                    .optional()?;
                Ok(row)
            })
            .await?;

        debug!(found = entry.is_some(), "Store read");
        Ok(entry)
    }

    #[instrument(skip(self, entry), fields(first = %entry.first_word, second = %entry.second_word))]
    async fn append(&self, entry: CacheEntry) -> StorageResult<()> {
        self.with_conn(move |conn| {
            conn.execute(
                INSERT_PAIR,
                params![entry.first_word, entry.second_word, entry.result, entry.emoji],
            )?;
            Ok(())
        })
        .await?;

        debug!("Store append");
        Ok(())
    }

    async fn ping(&self) -> StorageResult<()> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }
}

impl std::fmt::Debug for SqlitePairStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlitePairStore")
            .field("path", &self.path)
            .field("closed", &self.is_closed())
            .finish()
    }
}
