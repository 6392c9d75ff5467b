//! Resolution orchestrator: cache check, generate, validate, cache write.
//!
//! ```text
//! CACHE_CHECK --hit--> DONE
//!      | miss
//!      v
//! GENERATE_AND_VALIDATE --rejected--> DONE
//!      | accepted
//!      v
//! CACHE_WRITE --> DONE
//! ```
//!
//! Misses run in a task owned by the resolver. A caller that stops waiting
//! abandons the result, but generation and the cache write still complete.

pub mod error;
pub mod inflight;


pub use error::ResolveError;
pub use inflight::{InFlight, InFlightGuard};

use std::sync::Arc;

use tracing::{Instrument, debug, info, instrument};

use crate::cache::{PairCache, ResolveStatus};
use crate::generation::{ConstrainedModel, Generator};
use crate::hashing::key_hex;
use crate::pair::WordPair;
use crate::storage::{CacheEntry, PairStore};
use crate::validation::{GenerationResult, Verdict, validate};

/// What the caller gets back: the two-field result and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub result: GenerationResult,
    pub status: ResolveStatus,
}

impl Resolution {
    fn hit(entry: &CacheEntry) -> Self {
        Self {
            result: entry.to_result(),
            status: ResolveStatus::Hit,
        }
    }
}

struct Inner<M: ConstrainedModel, S: PairStore> {
    cache: PairCache<S>,
    generator: Generator<M>,
    inflight: InFlight,
}

/// Shared entry point for resolving word pairs.
///
/// Cloning is cheap; clones share the cache, the model and the single-flight
/// table.
pub struct Resolver<M: ConstrainedModel, S: PairStore> {
    inner: Arc<Inner<M, S>>,
}

impl<M, S> Resolver<M, S>
where
    M: ConstrainedModel + 'static,
    S: PairStore + 'static,
{
    pub fn new(cache: PairCache<S>, generator: Generator<M>) -> Self {
        Self {
            inner: Arc::new(Inner {
                cache,
                generator,
                inflight: InFlight::new(),
            }),
        }
    }

    pub fn cache(&self) -> &PairCache<S> {
        &self.inner.cache
    }

    pub fn inflight(&self) -> &InFlight {
        &self.inner.inflight
    }

    /// Resolves two raw words. Both are normalized first.
    ///
    /// A rejected answer comes back as an empty result with
    /// [`ResolveStatus::Rejected`]; only storage and model failures are errors.
    #[instrument(skip(self))]
    pub async fn resolve(&self, first: &str, second: &str) -> Result<Resolution, ResolveError> {
        let pair = WordPair::new(first, second)?;
        self.resolve_pair(pair).await
    }

    /// Resolves an already-normalized pair.
    pub async fn resolve_pair(&self, pair: WordPair) -> Result<Resolution, ResolveError> {
        if let Some(entry) = self.inner.cache.lookup(&pair).await? {
            return Ok(Resolution::hit(&entry));
        }

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(
            async move { inner.resolve_miss(pair).await }.instrument(tracing::Span::current()),
        );

        task.await
            .map_err(|e| ResolveError::TaskFailed(e.to_string()))?
    }
}

impl<M: ConstrainedModel, S: PairStore> Inner<M, S> {
    async fn resolve_miss(&self, pair: WordPair) -> Result<Resolution, ResolveError> {
        let _slot = self.inflight.acquire(*pair.key()).await;

        // Someone holding the slot before us may have stored the pair.
        if let Some(entry) = self.cache.lookup(&pair).await? {
            debug!(pair = %pair, "Resolved while waiting on in-flight generation");
            return Ok(Resolution::hit(&entry));
        }

        debug!(pair = %pair, key = %key_hex(pair.key()), "Cache miss, generating");
        let candidate = self.generator.generate(&pair).await?;

        match validate(&pair, &candidate.answer, &candidate.emoji) {
            Verdict::Accepted(result) => {
                self.cache.store_result(&pair, &result).await?;
                info!(pair = %pair, result = %result.result, emoji = %result.emoji, "New combination");
                Ok(Resolution {
                    result,
                    status: ResolveStatus::Miss,
                })
            }
            Verdict::Rejected(reason) => {
                info!(pair = %pair, reason = reason.as_str(), "Combination rejected, not cached");
                Ok(Resolution {
                    result: GenerationResult::rejected(),
                    status: ResolveStatus::Rejected,
                })
            }
        }
    }
}

impl<M: ConstrainedModel, S: PairStore> Clone for Resolver<M, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: ConstrainedModel, S: PairStore> std::fmt::Debug for Resolver<M, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("cache", &self.inner.cache)
            .field("generator", &self.inner.generator)
            .field("inflight", &self.inner.inflight)
            .finish()
    }
}
