//! Prompt construction and the structured-output contract.
//!
//! Both model calls share one schema: a JSON object with a single string
//! field, `answer`.

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::ModelError;
use crate::pair::WordPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Answer,
    Emoji,
}

/// A system instruction plus the user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub system: String,
    pub user: String,
}

/// Schema every generation is constrained to.
pub fn answer_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "answer": { "type": "string" }
        },
        "required": ["answer"]
    })
}

/// Builds the prompt asking for the word that combines `pair`.
///
/// The input words are spelled out in the instruction so the model can be
/// told not to reuse them.
pub fn answer_prompt(pair: &WordPair) -> Prompt {
    let (a, b) = (pair.first(), pair.second());

    let system = format!(
        "Tu es un assistant qui invente de nouvelles choses en combinant deux mots pour en obtenir un troisième. \
         Règle absolue : ta réponse ne doit jamais contenir les mots {a} ou {b}. \
         N'écris PAS {a} ni {b} dans la réponse, même en partie. \
         Réponds par une seule chose : pas de phrase, pas d'expression, pas de mots multiples, \
         pas de ponctuation, pas de caractères spéciaux, pas de chiffres, pas d'emoji, pas d'URL, pas de code. \
         La réponse doit être un nom commun ou un nom propre. \
         L'ordre des deux mots n'a pas d'importance. \
         La réponse doit avoir un lien avec les deux mots et leur contexte : \
         une chose (réelle ou imaginaire), un matériau, une personne, un animal, un métier, \
         un aliment, un lieu, un objet, une émotion, un événement, un concept, un phénomène naturel, \
         un véhicule, un sport, un vêtement, une technologie, un bâtiment, un instrument, une plante, \
         ou tout autre nom commun français ou nom propre."
    );

    let user = format!(
        "Que se passe-t-il si l'on combine {a} et {b} ? \
         Donne le résultat, lié aux deux mots, sans reprendre les mots eux-mêmes."
    );

    Prompt {
        kind: PromptKind::Answer,
        system,
        user,
    }
}

/// Builds the prompt asking for one emoji depicting `answer`.
pub fn emoji_prompt(answer: &str) -> Prompt {
    Prompt {
        kind: PromptKind::Emoji,
        system: "Réponds avec un seul emoji qui représente le mot donné. Utilise l'encodage UTF-8."
            .to_string(),
        user: answer.to_string(),
    }
}

#[derive(Deserialize)]
struct AnswerEnvelope {
    answer: String,
}

/// Extracts `answer` from a structured model reply.
pub fn parse_answer(raw: &str) -> Result<String, ModelError> {
    serde_json::from_str::<AnswerEnvelope>(raw.trim())
        .map(|envelope| envelope.answer)
        .map_err(|source| ModelError::MalformedOutput {
            raw: raw.to_string(),
            source,
        })
}
