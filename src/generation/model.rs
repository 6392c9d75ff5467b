use std::future::Future;

use serde_json::Value;

use super::error::ModelError;
use super::prompt::Prompt;

/// A loaded language model that can be asked for schema-conforming text.
///
/// Implementations are built once and shared; every call must be independent
/// of the previous one.
pub trait ConstrainedModel: Send + Sync {
    /// Context window in tokens. Used as the generation budget.
    fn context_size(&self) -> u32;

    /// Generates text for `prompt` that conforms to the JSON `schema`.
    fn generate(
        &self,
        prompt: &Prompt,
        schema: &Value,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}
