//! Knowledge source trait: short reference summaries used to ground replies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::error::KnowledgeError;

/// A short externally retrieved summary. Used once per turn, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceResult {
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl ReferenceResult {
    /// Truncate the summary to at most `max_chars` characters.
    pub fn truncated(mut self, max_chars: usize) -> Self {
        if let Some((idx, _)) = self.summary.char_indices().nth(max_chars) {
            self.summary.truncate(idx);
        }
        self
    }
}

/// An external knowledge-lookup service.
///
/// `Ok(None)` means the service answered but had nothing for the query;
/// `Err` means the service could not be asked at all.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// The source name (e.g., "wikipedia", "none").
    fn name(&self) -> &str;

    /// Look up a summary for `query`.
    async fn fetch_summary(&self, query: &str) -> std::result::Result<Option<ReferenceResult>, KnowledgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(summary: &str) -> ReferenceResult {
        ReferenceResult {
            title: "Rust".into(),
            summary: summary.into(),
            url: "https://en.wikipedia.org/wiki/Rust".into(),
        }
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let r = reference("héllo wörld").truncated(4);
        assert_eq!(r.summary, "héll");
    }

    #[test]
    fn short_summary_is_untouched() {
        let r = reference("short").truncated(500);
        assert_eq!(r.summary, "short");
    }
}
