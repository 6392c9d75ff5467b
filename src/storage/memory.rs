use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::{CacheEntry, PairStore, StorageError, StorageResult};

/// In-memory [`PairStore`] with switchable failures, for tests.
#[derive(Default, Clone)]
pub struct MemoryPairStore {
    rows: Arc<RwLock<Vec<CacheEntry>>>,
    reads: Arc<AtomicUsize>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryPairStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a row without going through [`PairStore::append`].
    pub fn insert(&self, entry: CacheEntry) {
        self.rows.write().push(entry);
    }

    pub fn rows(&self) -> Vec<CacheEntry> {
        self.rows.read().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Number of `get` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn injected_failure() -> StorageError {
        StorageError::Io(std::io::Error::other("injected failure"))
    }
}

impl PairStore for MemoryPairStore {
    async fn get(&self, first: &str, second: &str) -> StorageResult<Option<CacheEntry>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }

        Ok(self
            .rows
            .read()
            .iter()
            .find(|row| {
                row.first_word == first && row.second_word == second && !row.result.is_empty()
            })
            .cloned())
    }

    async fn append(&self, entry: CacheEntry) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        self.rows.write().push(entry);
        Ok(())
    }

    async fn ping(&self) -> StorageResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        Ok(())
    }
}
