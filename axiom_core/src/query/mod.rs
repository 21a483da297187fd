//! Query understanding - tokenization and recognition.
//!
//! The same tokenizer is used for prompts and for grounding text, so intent
//! recognition and citation scoring always agree on what a word is.

mod recognizer;

pub use recognizer::*;

use std::collections::HashSet;

/// Normalizes and tokenizes raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Lowercase `text` and split it into maximal runs of letters, digits
    /// and underscores. Everything else separates tokens.
    pub fn parse(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }

    /// Unique tokens of `text`.
    pub fn word_set(text: &str) -> HashSet<String> {
        Self::parse(text).into_iter().collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
