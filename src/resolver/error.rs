use thiserror::Error;

use crate::generation::ModelError;
use crate::pair::PairError;
use crate::storage::StorageError;

/// Hard failures of a resolution. A rejected answer is not one of them.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] PairError),

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("generation failed: {0}")]
    Model(#[from] ModelError),

    #[error("resolution task failed: {0}")]
    TaskFailed(String),
}
