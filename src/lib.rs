//! Alembic library crate (used by the server and integration tests).
//!
//! Two words go in, one new word and an emoji come out. Results are cached
//! per unordered pair so `A + B` and `B + A` always agree.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`WordPair`], [`PairError`] - Normalized, order-independent input
//! - [`Resolver`], [`Resolution`], [`ResolveError`] - Cache check, generate, validate, store
//! - [`GenerationResult`], [`Verdict`], [`RejectReason`] - Acceptance rules
//!
//! ## Cache & Storage
//! - [`PairCache`], [`HotCache`] - Symmetric lookup over a hot tier and a store
//! - [`PairStore`], [`SqlitePairStore`], [`CacheEntry`] - Persistent rows
//!
//! ## Generation
//! - [`ConstrainedModel`], [`GenaiModel`], [`Generator`] - Schema-constrained LLM calls
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - Environment configuration
//! - [`gateway`] - Axum router and handlers
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod generation;
pub mod hashing;
pub mod pair;
pub mod resolver;
pub mod storage;
pub mod validation;

pub use cache::{
    ALEMBIC_STATUS_ERROR, ALEMBIC_STATUS_HEADER, ALEMBIC_STATUS_HEALTHY, ALEMBIC_STATUS_NOT_READY,
    ALEMBIC_STATUS_READY, HotCache, PairCache, ResolveStatus,
};
pub use config::{Config, ConfigError};
pub use generation::{
    Candidate, ConstrainedModel, GenaiModel, Generator, ModelError, Prompt, PromptKind,
};
#[cfg(any(test, feature = "mock"))]
pub use generation::{MockModel, MockReply, MockRequest};
pub use hashing::{hash_pair, key_hex};
pub use pair::{PairError, WordPair, capitalize_first, normalize_word};
pub use resolver::{Resolution, ResolveError, Resolver};
#[cfg(any(test, feature = "mock"))]
pub use storage::MemoryPairStore;
pub use storage::{CacheEntry, PairStore, SqlitePairStore, StorageError, StorageResult};
pub use validation::{GenerationResult, RejectReason, Verdict, validate};
