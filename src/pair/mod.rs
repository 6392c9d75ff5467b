//! Word normalization and the unordered [`WordPair`] cache key.

use std::fmt;

use thiserror::Error;

use crate::hashing::hash_pair;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("word is empty after trimming: {raw:?}")]
    EmptyWord { raw: String },
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Canonical form of a raw word: trimmed, lowercased, first letter capitalized.
///
/// `"eau"`, `" Eau "` and `"EAU"` all become `"Eau"`.
pub fn normalize_word(raw: &str) -> String {
    capitalize_first(&raw.trim().to_lowercase())
}

/// Two normalized words, equal to its mirror for caching purposes.
///
/// The order given at construction is kept: it becomes the stored order when
/// the pair is first written to the cache.
#[derive(Debug, Clone)]
pub struct WordPair {
    first: String,
    second: String,
    key: [u8; 32],
}

impl WordPair {
    /// Normalizes both words. Blank input is refused.
    pub fn new(first: &str, second: &str) -> Result<Self, PairError> {
        let first = Self::normalize_non_empty(first)?;
        let second = Self::normalize_non_empty(second)?;
        let key = hash_pair(&first, &second);
        Ok(Self { first, second, key })
    }

    fn normalize_non_empty(raw: &str) -> Result<String, PairError> {
        let word = normalize_word(raw);
        if word.is_empty() {
            return Err(PairError::EmptyWord {
                raw: raw.to_string(),
            });
        }
        Ok(word)
    }

    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Order-independent key; identical for `{a, b}` and `{b, a}`.
    #[inline]
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }
}

impl PartialEq for WordPair {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for WordPair {}

impl std::hash::Hash for WordPair {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word_variants() {
        assert_eq!(normalize_word("eau"), "Eau");
        assert_eq!(normalize_word(" Eau "), "Eau");
        assert_eq!(normalize_word("EAU"), "Eau");
        assert_eq!(normalize_word("\tfEU\n"), "Feu");
    }

    #[test]
    fn test_normalize_word_unicode() {
        assert_eq!(normalize_word("ÉLECTRICITÉ"), "Électricité");
        assert_eq!(normalize_word("  œuf"), "Œuf");
    }

    #[test]
    fn test_normalize_word_keeps_inner_spaces() {
        assert_eq!(normalize_word("  POMME DE TERRE "), "Pomme de terre");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("volcan"), "Volcan");
        assert_eq!(capitalize_first("vAPEUR"), "VAPEUR");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("é"), "É");
    }

    #[test]
    fn test_word_pair_normalizes() {
        let pair = WordPair::new(" eau ", "FEU").expect("valid pair");
        assert_eq!(pair.first(), "Eau");
        assert_eq!(pair.second(), "Feu");
        assert_eq!(pair.to_string(), "Eau + Feu");
    }

    #[test]
    fn test_word_pair_is_unordered() {
        let ab = WordPair::new("Eau", "Feu").expect("valid pair");
        let ba = WordPair::new("feu", "eau").expect("valid pair");
        assert_eq!(ab, ba);
        assert_eq!(ab.key(), ba.key());
    }

    #[test]
    fn test_word_pair_rejects_blank() {
        let err = WordPair::new("   ", "Feu").unwrap_err();
        assert_eq!(
            err,
            PairError::EmptyWord {
                raw: "   ".to_string()
            }
        );
        assert!(WordPair::new("Eau", "").is_err());
    }
}
