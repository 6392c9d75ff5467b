//! Order-independent lookup and write-through storage of accepted results.

use tracing::{debug, info, instrument};

use super::hot::HotCache;
use crate::pair::WordPair;
use crate::storage::{CacheEntry, PairStore, StorageResult};
use crate::validation::GenerationResult;

/// Hot tier in front of a persistent [`PairStore`].
///
/// Storage errors are returned as-is; there is no retry.
pub struct PairCache<S: PairStore> {
    hot: HotCache,
    store: S,
}

impl<S: PairStore> PairCache<S> {
    pub fn new(hot: HotCache, store: S) -> Self {
        Self { hot, store }
    }

    pub fn hot(&self) -> &HotCache {
        &self.hot
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Finds the entry for `pair` in either order.
    ///
    /// The store is probed as `(first, second)`, then `(second, first)`,
    /// because the stored order is whichever order first produced the entry.
    #[instrument(skip(self, pair), fields(pair = %pair))]
    pub async fn lookup(&self, pair: &WordPair) -> StorageResult<Option<CacheEntry>> {
        if let Some(entry) = self.hot.get(pair) {
            debug!("Hot tier hit");
            return Ok(Some(entry));
        }

        let found = match self.store.get(pair.first(), pair.second()).await? {
            Some(entry) => Some(entry),
            None => self.store.get(pair.second(), pair.first()).await?,
        };

        match found {
            Some(entry) => {
                info!(result = %entry.result, "Store hit");
                self.hot.insert(pair, entry.clone());
                Ok(Some(entry))
            }
            None => {
                debug!("Cache miss");
                Ok(None)
            }
        }
    }

    /// Appends an accepted result for `pair`, in the pair's current order.
    ///
    /// Callers must have seen [`lookup`](Self::lookup) miss first; the store
    /// itself does not deduplicate.
    #[instrument(skip(self, pair, result), fields(pair = %pair, result = %result.result))]
    pub async fn store_result(
        &self,
        pair: &WordPair,
        result: &GenerationResult,
    ) -> StorageResult<CacheEntry> {
        let entry = CacheEntry::new(
            pair.first(),
            pair.second(),
            result.result.as_str(),
            result.emoji.as_str(),
        );

        self.store.append(entry.clone()).await?;
        self.hot.insert(pair, entry.clone());

        info!("Stored new combination");
        Ok(entry)
    }

    pub async fn is_ready(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

impl<S: PairStore> std::fmt::Debug for PairCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairCache").field("hot", &self.hot).finish()
    }
}
