//! Acceptance rules for generated answers.
//!
//! A rejected answer is a normal outcome, not an error: the caller gets an
//! empty [`GenerationResult`] and nothing is cached.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEGENERATE_LENGTH_SLACK, MAX_ANSWER_TOKENS};
use crate::pair::{WordPair, capitalize_first};

/// Outcome of one generation: both fields set, or both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub result: String,
    pub emoji: String,
}

impl GenerationResult {
    /// The empty pair returned on rejection.
    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn is_rejected(&self) -> bool {
        self.result.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    BlankAnswer,
    TooManyWords { tokens: usize },
    ConcatenatedInputs,
    BlankEmoji,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::BlankAnswer => "blank_answer",
            RejectReason::TooManyWords { .. } => "too_many_words",
            RejectReason::ConcatenatedInputs => "concatenated_inputs",
            RejectReason::BlankEmoji => "blank_emoji",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(GenerationResult),
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn into_result(self) -> GenerationResult {
        match self {
            Verdict::Accepted(result) => result,
            Verdict::Rejected(_) => GenerationResult::rejected(),
        }
    }
}

/// Judges a raw model answer (and its emoji) for `pair`.
///
/// Rejects when the answer has more than [`MAX_ANSWER_TOKENS`] space-separated
/// tokens, or when it contains both input words and is shorter than their
/// combined length plus [`DEGENERATE_LENGTH_SLACK`]. Lengths are counted in
/// characters. Accepted answers get their first letter capitalized; the emoji
/// is passed through untouched.
pub fn validate(pair: &WordPair, answer: &str, emoji: &str) -> Verdict {
    let verdict = judge(pair, answer, emoji);
    if let Verdict::Rejected(reason) = &verdict {
        debug!(pair = %pair, answer, reason = reason.as_str(), "Answer rejected");
    }
    verdict
}

fn judge(pair: &WordPair, answer: &str, emoji: &str) -> Verdict {
    let answer = answer.trim();
    if answer.is_empty() {
        return Verdict::Rejected(RejectReason::BlankAnswer);
    }

    let lowered = answer.to_lowercase();

    let tokens = lowered.split(' ').count();
    if tokens > MAX_ANSWER_TOKENS {
        return Verdict::Rejected(RejectReason::TooManyWords { tokens });
    }

    let first = pair.first().to_lowercase();
    let second = pair.second().to_lowercase();
    let min_len =
        pair.first().chars().count() + pair.second().chars().count() + DEGENERATE_LENGTH_SLACK;
    if lowered.contains(&first) && lowered.contains(&second) && answer.chars().count() < min_len {
        return Verdict::Rejected(RejectReason::ConcatenatedInputs);
    }

    if emoji.trim().is_empty() {
        return Verdict::Rejected(RejectReason::BlankEmoji);
    }

    Verdict::Accepted(GenerationResult {
        result: capitalize_first(answer),
        emoji: emoji.to_string(),
    })
}
