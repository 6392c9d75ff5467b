//! Cross-cutting, shared constants.
//!
//! Runtime-tunable values have a default here and an `ALEMBIC_*` override in
//! [`crate::config::Config`].

/// Seed handed to the model for every generation.
pub const DEFAULT_SEED: u64 = 0;

/// Context window of the default model; also the generation budget.
pub const DEFAULT_CONTEXT_SIZE: u32 = 4096;

/// Model identifier resolved by `genai` (unknown names are routed to Ollama).
pub const DEFAULT_MODEL: &str = "mistral:7b-instruct";

/// Max entries held by the in-memory hot tier in front of the store.
pub const DEFAULT_HOT_CAPACITY: u64 = 10_000;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Answers with more space-separated tokens than this are rejected.
pub const MAX_ANSWER_TOKENS: usize = 3;

/// Slack added to the combined input length when spotting answers that are
/// just the two inputs glued together.
pub const DEGENERATE_LENGTH_SLACK: usize = 2;

/// The four elements every game starts with.
pub const STARTER_PAIRS: [(&str, &str); 6] = [
    ("Eau", "Feu"),
    ("Eau", "Terre"),
    ("Feu", "Terre"),
    ("Eau", "Air"),
    ("Terre", "Air"),
    ("Feu", "Air"),
];
