//! Rule-based intent classification.
//!
//! Rules are checked in order and the first match wins:
//!
//! | # | Rule | Intent |
//! |---|------|--------|
//! | 1 | first word is a wh-word | question |
//! | 2 | first word is an imperative verb | command |
//! | 3 | text contains a greeting keyword | greeting |
//! | 4 | text contains a farewell keyword | farewell |
//! | 5 | otherwise | statement |
//!
//! Keyword checks are plain substring checks, so "this" counts as a greeting
//! (it contains "hi"). That mirrors how the rules have always behaved.

use parley_core::Intent;

const QUESTION_WORDS: &[&str] = &["what", "who", "where", "when", "why", "how"];
const COMMAND_WORDS: &[&str] = &["find", "search", "look", "get", "tell"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const FAREWELL_KEYWORDS: &[&str] = &["goodbye", "bye", "see you", "farewell"];

/// Classify an utterance. Case-insensitive; empty text is a statement.
pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();
    let first_word = text.split_whitespace().next().unwrap_or("");

    if QUESTION_WORDS.contains(&first_word) {
        Intent::Question
    } else if COMMAND_WORDS.contains(&first_word) {
        Intent::Command
    } else if GREETING_KEYWORDS.iter().any(|k| text.contains(k)) {
        Intent::Greeting
    } else if FAREWELL_KEYWORDS.iter().any(|k| text.contains(k)) {
        Intent::Farewell
    } else {
        Intent::Statement
    }
}
