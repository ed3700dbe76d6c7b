//! Linguistic analysis types: what the message processor produces.
//!
//! A [`ProcessedMessage`] is created once per incoming user utterance and is
//! read-only afterwards; the reference retriever and the response composer
//! both consume it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::error::AnnotationError;

/// Coarse communicative purpose of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Question,
    Command,
    Greeting,
    Farewell,
    Statement,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Command => "command",
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Statement => "statement",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled span of text, e.g. `("New York", "ENTITY")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// The fully analyzed form of one user utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedMessage {
    /// The raw text as received
    pub original: String,

    /// Lowercased, dictionary-corrected text
    pub corrected: String,

    /// Tokens of the corrected text, in order
    pub tokens: Vec<String>,

    /// Proper-noun spans, in order of appearance (duplicates allowed)
    pub entities: Vec<Entity>,

    pub intent: Intent,

    /// Deduplicated content-word phrases
    pub key_phrases: BTreeSet<String>,
}

/// The linguistic capability: tokenization plus part-of-speech tagging.
///
/// Implementations must use a stable tag convention so that proper nouns and
/// noun/adjective/verb categories can be recognized by tag prefix.
pub trait Tagger: Send + Sync {
    /// A human-readable name for this tagger (e.g., "lexicon").
    fn name(&self) -> &str;

    /// Tokenize and tag `text`, preserving token order.
    fn annotate(&self, text: &str) -> std::result::Result<Vec<TaggedToken>, AnnotationError>;
}
