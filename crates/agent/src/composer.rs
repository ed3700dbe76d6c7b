//! Prompt composition and reply clean-up.
//!
//! [`compose`] lays out the structured prompt in a fixed order:
//!
//! 1. the system instruction
//! 2. the windowed conversation history, roles unchanged
//! 3. the retrieved reference, if any, as a second system message
//! 4. the user's corrected text
//!
//! [`postprocess`] strips reasoning blocks and markup from raw model output
//! and tidies whitespace. It is a handful of linear scans with no regex.

use parley_core::analysis::ProcessedMessage;
use parley_core::knowledge::ReferenceResult;
use parley_core::message::{PromptMessage, Turn};

pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant with access to real-time web information. \
Provide clear, concise, and accurate responses. \
Do not show your thinking process. \
If using web information, cite sources briefly. \
Keep responses focused and to the point. \
Use natural, conversational language but maintain professionalism.";

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// The system message that carries a retrieved reference into the prompt.
pub fn reference_context(reference: &ReferenceResult) -> String {
    format!(
        "Web search results:\nWikipedia ({}):\n{}\n",
        reference.title, reference.summary
    )
}

/// Build the prompt for one turn.
pub fn compose(
    processed: &ProcessedMessage,
    context: &[Turn],
    reference: Option<&ReferenceResult>,
) -> Vec<PromptMessage> {
    let mut messages = Vec::with_capacity(context.len() + 3);
    messages.push(PromptMessage::system(SYSTEM_PROMPT));
    messages.extend(context.iter().map(PromptMessage::from));
    if let Some(reference) = reference {
        messages.push(PromptMessage::system(reference_context(reference)));
    }
    messages.push(PromptMessage::user(processed.corrected.clone()));
    messages
}

/// Clean raw model output for display.
///
/// Applied in order: drop `<think>…</think>` blocks, drop any other `<…>`
/// markup, squeeze blank-line runs to one blank line, squeeze runs of spaces,
/// trim. Running it twice changes nothing.
pub fn postprocess(raw: &str) -> String {
    let text = strip_think_blocks(raw);
    let text = strip_markup(&text);
    let text = squeeze_blank_lines(&text);
    let text = squeeze_spaces(&text);
    text.trim().to_string()
}

/// Remove each `<think>` and the nearest `</think>` after it. An unclosed
/// block is left for the markup pass.
fn strip_think_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(THINK_OPEN) {
        let after_open = start + THINK_OPEN.len();
        let Some(close) = rest[after_open..].find(THINK_CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[after_open + close + THINK_CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

/// Remove every `<` ... `>` span with at least one character inside.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let inner = &rest[open + 1..];
        match inner.find('>') {
            Some(close) if close > 0 => rest = &inner[close + 1..],
            _ => {
                out.push('<');
                rest = inner;
            }
        }
    }

    out.push_str(rest);
    out
}

/// A newline, any whitespace, then another newline becomes exactly `"\n\n"`.
/// The span reaches the last newline of the whitespace run.
fn squeeze_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(nl) = rest.find('\n') {
        out.push_str(&rest[..nl]);
        let run = &rest[nl..];
        let run_len = run
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(run.len());
        // `run` starts with '\n', so rfind finds at least that one.
        let last_nl = run[..run_len].rfind('\n').unwrap_or(0);
        if last_nl > 0 {
            out.push_str("\n\n");
        } else {
            out.push('\n');
        }
        rest = &run[last_nl + 1..];
    }

    out.push_str(rest);
    out
}

fn squeeze_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::analysis::Intent;
    use parley_core::message::Role;
    use std::collections::BTreeSet;

    fn processed(corrected: &str) -> ProcessedMessage {
        ProcessedMessage {
            original: corrected.into(),
            corrected: corrected.into(),
            tokens: Vec::new(),
            entities: Vec::new(),
            intent: Intent::Question,
            key_phrases: BTreeSet::new(),
        }
    }

    #[test]
    fn compose_without_history_or_reference() {
        let messages = compose(&processed("what is rust"), &[], None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], PromptMessage::system(SYSTEM_PROMPT));
        assert_eq!(messages[1], PromptMessage::user("what is rust"));
    }

    #[test]
    fn compose_orders_history_reference_then_user() {
        let context = vec![Turn::user("Hi"), Turn::assistant("Hello!")];
        let reference = ReferenceResult {
            title: "Rust (programming language)".into(),
            summary: "Rust is a language.".into(),
            url: "https://en.wikipedia.org/wiki/Rust_(programming_language)".into(),
        };

        let messages = compose(&processed("what is rust"), &context, Some(&reference));
        let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::System, Role::User]
        );
        assert_eq!(messages[1].content, "Hi");
        assert_eq!(
            messages[3].content,
            "Web search results:\nWikipedia (Rust (programming language)):\nRust is a language.\n"
        );
        assert_eq!(messages[4].content, "what is rust");
    }

    #[test]
    fn postprocess_removes_reasoning_block() {
        assert_eq!(
            postprocess("<think>internal steps\nmore</think>Hello there"),
            "Hello there"
        );
    }

    #[test]
    fn think_blocks_are_non_greedy() {
        assert_eq!(
            postprocess("<think>a</think>keep<think>b</think> this"),
            "keep this"
        );
    }

    #[test]
    fn unclosed_think_falls_to_markup_pass() {
        assert_eq!(postprocess("<think>still going"), "still going");
    }

    #[test]
    fn markup_needs_content_between_brackets() {
        assert_eq!(postprocess("a <b>bold</b> move"), "a bold move");
        assert_eq!(postprocess("x <> y"), "x <> y");
        assert_eq!(postprocess("1 < 2 and 3 > 2"), "1 2");
        assert_eq!(postprocess("dangling < here"), "dangling < here");
    }

    #[test]
    fn blank_line_runs_collapse() {
        assert_eq!(postprocess("one\n\n\n\ntwo"), "one\n\ntwo");
        assert_eq!(postprocess("one\n  \t\n  two"), "one\n\n two");
        assert_eq!(postprocess("one\ntwo"), "one\ntwo");
    }

    #[test]
    fn spaces_collapse_and_ends_trim() {
        assert_eq!(postprocess("   lots    of   space   "), "lots of space");
        assert_eq!(postprocess(""), "");
        assert_eq!(postprocess(" \n\t "), "");
    }

    #[test]
    fn postprocess_is_idempotent() {
        let samples = [
            "<think>plan</think>\n\n  Sure!  <i>Here</i>\n \n\n is   the answer. ",
            "a\n\n\t\n b <<x>> c",
            "<think>open <tag> \n\n\n",
            "x <> y < z",
            "\u{00a0}\n\u{2003}\nunicode space",
            "multi\n\n\n\nparagraph\n\n\n\n\ntext",
        ];
        for sample in samples {
            let once = postprocess(sample);
            assert_eq!(postprocess(&once), once, "not idempotent for {sample:?}");
        }
    }
}
