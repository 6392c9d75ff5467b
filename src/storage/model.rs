use serde::{Deserialize, Serialize};

use crate::validation::GenerationResult;

/// One accepted combination, as persisted.
///
/// `first_word`/`second_word` keep the order in which the pair was first
/// resolved. Entries are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub first_word: String,
    pub second_word: String,
    pub result: String,
    pub emoji: String,
}

impl CacheEntry {
    pub fn new(
        first_word: impl Into<String>,
        second_word: impl Into<String>,
        result: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            first_word: first_word.into(),
            second_word: second_word.into(),
            result: result.into(),
            emoji: emoji.into(),
        }
    }

    pub fn to_result(&self) -> GenerationResult {
        GenerationResult {
            result: self.result.clone(),
            emoji: self.emoji.clone(),
        }
    }
}
