//! [`ConstrainedModel`] backed by a `genai` client.
//!
//! Model names unknown to `genai` are routed to a local Ollama daemon, which
//! is where a quantized instruct model usually lives.

use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ChatResponseFormat, JsonSpec};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::ModelError;
use super::model::ConstrainedModel;
use super::prompt::Prompt;

const SCHEMA_NAME: &str = "answer";

pub struct GenaiModel {
    client: Client,
    model: String,
    seed: u64,
    context_size: u32,
}

impl GenaiModel {
    pub fn new(model: impl Into<String>, seed: u64, context_size: u32) -> Self {
        Self::with_client(Client::default(), model, seed, context_size)
    }

    pub fn with_client(
        client: Client,
        model: impl Into<String>,
        seed: u64,
        context_size: u32,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            seed,
            context_size,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn options(&self, schema: &Value, max_tokens: u32) -> ChatOptions {
        ChatOptions::default()
            .with_temperature(0.0)
            .with_seed(self.seed)
            .with_max_tokens(max_tokens)
            .with_response_format(ChatResponseFormat::JsonSpec(JsonSpec::new(
                SCHEMA_NAME,
                schema.clone(),
            )))
    }
}

impl ConstrainedModel for GenaiModel {
    fn context_size(&self) -> u32 {
        self.context_size
    }

    #[instrument(skip(self, prompt, schema), fields(model = %self.model, kind = ?prompt.kind))]
    async fn generate(
        &self,
        prompt: &Prompt,
        schema: &Value,
        max_tokens: u32,
    ) -> Result<String, ModelError> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt.user.clone())])
            .with_system(prompt.system.clone());
        let options = self.options(schema, max_tokens);

        let response = self
            .client
            .exec_chat(&self.model, request, Some(&options))
            .await
            .map_err(|e| {
                error!("Provider error: {}", e);
                ModelError::Provider(e.to_string())
            })?;

        let text = response
            .first_text()
            .map(str::to_string)
            .ok_or(ModelError::EmptyResponse)?;

        debug!(len = text.len(), "Model replied");
        Ok(text)
    }
}

impl std::fmt::Debug for GenaiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiModel")
            .field("model", &self.model)
            .field("seed", &self.seed)
            .field("context_size", &self.context_size)
            .finish()
    }
}
