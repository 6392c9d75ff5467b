use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;

use super::error::ModelError;
use super::model::ConstrainedModel;
use super::prompt::{Prompt, PromptKind};

/// A scripted reply: raw text handed back as-is, or a provider failure.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    ProviderError(String),
}

impl MockReply {
    /// `{"answer": value}`, as a well-behaved model would reply.
    pub fn answer(value: &str) -> Self {
        MockReply::Text(serde_json::json!({ "answer": value }).to_string())
    }

    pub fn raw(text: &str) -> Self {
        MockReply::Text(text.to_string())
    }
}

/// What one `generate` call was given besides the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct MockRequest {
    pub kind: PromptKind,
    pub schema: Value,
    pub max_tokens: u32,
}

#[derive(Default)]
struct Script {
    answers: VecDeque<MockReply>,
    emojis: VecDeque<MockReply>,
    prompts: Vec<Prompt>,
    requests: Vec<MockRequest>,
}

/// Scripted [`ConstrainedModel`] for tests.
///
/// Answer and emoji prompts draw from separate queues. The last reply in a
/// queue is sticky: it is repeated once everything before it was consumed.
#[derive(Clone)]
pub struct MockModel {
    script: Arc<Mutex<Script>>,
    latency: Option<Duration>,
    context_size: u32,
}

impl MockModel {
    pub const CONTEXT_SIZE: u32 = 4096;

    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            latency: None,
            context_size: Self::CONTEXT_SIZE,
        }
    }

    /// Always answers `answer`, with `emoji` as the emoji.
    pub fn answering(answer: &str, emoji: &str) -> Self {
        Self::new()
            .with_answer(MockReply::answer(answer))
            .with_emoji(MockReply::answer(emoji))
    }

    pub fn with_answer(self, reply: MockReply) -> Self {
        self.script.lock().answers.push_back(reply);
        self
    }

    pub fn with_emoji(self, reply: MockReply) -> Self {
        self.script.lock().emojis.push_back(reply);
        self
    }

    /// Sleeps this long before every reply.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_context_size(mut self, context_size: u32) -> Self {
        self.context_size = context_size;
        self
    }

    /// Every prompt received so far, in order.
    pub fn prompts(&self) -> Vec<Prompt> {
        self.script.lock().prompts.clone()
    }

    /// Schema and budget of every call so far, in order.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.script.lock().requests.clone()
    }

    pub fn calls(&self) -> usize {
        self.script.lock().prompts.len()
    }

    /// Number of answer prompts, i.e. generation attempts.
    pub fn answer_calls(&self) -> usize {
        self.count(PromptKind::Answer)
    }

    pub fn emoji_calls(&self) -> usize {
        self.count(PromptKind::Emoji)
    }

    fn count(&self, kind: PromptKind) -> usize {
        self.script
            .lock()
            .prompts
            .iter()
            .filter(|p| p.kind == kind)
            .count()
    }

    fn next_reply(&self, prompt: &Prompt, schema: &Value, max_tokens: u32) -> Option<MockReply> {
        let mut script = self.script.lock();
        script.prompts.push(prompt.clone());
        script.requests.push(MockRequest {
            kind: prompt.kind,
            schema: schema.clone(),
            max_tokens,
        });

        let queue = match prompt.kind {
            PromptKind::Answer => &mut script.answers,
            PromptKind::Emoji => &mut script.emojis,
        };

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstrainedModel for MockModel {
    fn context_size(&self) -> u32 {
        self.context_size
    }

    async fn generate(
        &self,
        prompt: &Prompt,
        schema: &Value,
        max_tokens: u32,
    ) -> Result<String, ModelError> {
        let reply = self.next_reply(prompt, schema, max_tokens);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::ProviderError(message)) => Err(ModelError::Provider(message)),
            None => Err(ModelError::Provider(format!(
                "no scripted {:?} reply",
                prompt.kind
            ))),
        }
    }
}

impl std::fmt::Debug for MockModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockModel")
            .field("calls", &self.calls())
            .field("context_size", &self.context_size)
            .finish()
    }
}
