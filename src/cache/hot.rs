//! In-memory hot tier keyed by the order-independent pair key.
//!
//! Cached entries are immutable, so nothing here is ever invalidated except
//! by capacity eviction.

use moka::sync::Cache;

use crate::constants::DEFAULT_HOT_CAPACITY;
use crate::pair::WordPair;
use crate::storage::CacheEntry;

/// Bounded map from pair key to accepted [`CacheEntry`].
///
/// Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct HotCache {
    entries: Cache<[u8; 32], CacheEntry>,
}

impl HotCache {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HOT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    #[inline]
    pub fn get(&self, pair: &WordPair) -> Option<CacheEntry> {
        self.entries.get(pair.key())
    }

    #[inline]
    pub fn insert(&self, pair: &WordPair, entry: CacheEntry) {
        self.entries.insert(*pair.key(), entry);
    }

    #[inline]
    pub fn contains(&self, pair: &WordPair) -> bool {
        self.entries.contains_key(pair.key())
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    /// Runs any pending maintenance tasks in the underlying cache.
    #[inline]
    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }
}

impl Default for HotCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
