//! Symmetric pair cache: in-memory hot tier over a persistent [`PairStore`].
//!
//! [`PairStore`]: crate::storage::PairStore

pub mod hot;
pub mod pair;
pub mod types;

#[cfg(test)]
mod pair_tests;

pub use hot::HotCache;
pub use pair::PairCache;
pub use types::{
    ALEMBIC_STATUS_ERROR, ALEMBIC_STATUS_HEADER, ALEMBIC_STATUS_HEALTHY, ALEMBIC_STATUS_NOT_READY,
    ALEMBIC_STATUS_READY, ResolveStatus,
};
