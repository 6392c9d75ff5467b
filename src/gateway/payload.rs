use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::GenerationResult;

/// Body of `POST /`. Both fields are optional so that a missing word is
/// reported as an invalid request rather than a deserialization failure.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CombineRequest {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub second: Option<String>,
}

impl CombineRequest {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: Some(first.into()),
            second: Some(second.into()),
        }
    }
}

/// Body of `GET /`: starter combinations keyed by `"A + B"`.
pub type StartersResponse = BTreeMap<String, GenerationResult>;
