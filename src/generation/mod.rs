//! Constrained generation: one answer prompt, then one emoji prompt.
//!
//! Both calls run under the same JSON schema and a budget equal to the
//! model's context window. There is no retry; each attempt is exactly two
//! model invocations, strictly in sequence.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod prompt;
pub mod provider;


pub use error::ModelError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockModel, MockReply, MockRequest};
pub use model::ConstrainedModel;
pub use prompt::{Prompt, PromptKind, answer_prompt, answer_schema, emoji_prompt, parse_answer};
pub use provider::GenaiModel;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::pair::WordPair;

/// Raw, unvalidated output of one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub answer: String,
    pub emoji: String,
}

/// Drives a shared [`ConstrainedModel`] through the two-prompt protocol.
pub struct Generator<M: ConstrainedModel> {
    model: Arc<M>,
    schema: Value,
}

impl<M: ConstrainedModel> Generator<M> {
    pub fn new(model: Arc<M>) -> Self {
        Self {
            model,
            schema: answer_schema(),
        }
    }

    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    /// Asks for the combined word, then for an emoji depicting it.
    ///
    /// Unparsable output from either call is a [`ModelError::MalformedOutput`].
    #[instrument(skip(self, pair), fields(pair = %pair))]
    pub async fn generate(&self, pair: &WordPair) -> Result<Candidate, ModelError> {
        let budget = self.model.context_size();

        let raw = self
            .model
            .generate(&answer_prompt(pair), &self.schema, budget)
            .await?;
        let answer = parse_answer(&raw)?;
        debug!(answer = %answer, "Answer generated");

        let raw = self
            .model
            .generate(&emoji_prompt(&answer), &self.schema, budget)
            .await?;
        let emoji = parse_answer(&raw)?;
        debug!(emoji = %emoji, "Emoji generated");

        Ok(Candidate { answer, emoji })
    }
}

impl<M: ConstrainedModel> Clone for Generator<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            schema: self.schema.clone(),
        }
    }
}

impl<M: ConstrainedModel> std::fmt::Debug for Generator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("context_size", &self.model.context_size())
            .finish()
    }
}
