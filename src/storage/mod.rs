//! Persistent pair storage.
//!
//! [`PairStore`] is the narrow contract the cache needs: exact-order reads,
//! appends, and a liveness probe. [`SqlitePairStore`] is the production
//! backend; [`MemoryPairStore`] backs tests.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod memory;
mod model;
pub mod sqlite;

pub use error::{StorageError, StorageResult};
#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryPairStore;
pub use model::CacheEntry;
pub use sqlite::SqlitePairStore;

use std::future::Future;

/// Append-only store of [`CacheEntry`] records.
///
/// No uniqueness is enforced here: callers decide when a write is warranted.
pub trait PairStore: Send + Sync {
    /// Returns the earliest entry stored exactly as `(first, second)`, if any.
    ///
    /// Rows with an empty result are rejected generations and never match.
    fn get(
        &self,
        first: &str,
        second: &str,
    ) -> impl Future<Output = StorageResult<Option<CacheEntry>>> + Send;

    /// Appends a record.
    fn append(&self, entry: CacheEntry) -> impl Future<Output = StorageResult<()>> + Send;

    /// Cheap round-trip used by readiness checks.
    fn ping(&self) -> impl Future<Output = StorageResult<()>> + Send;
}
