//! Reference retriever: one lookup per message, failures degrade to nothing.

use parley_core::analysis::ProcessedMessage;
use parley_core::knowledge::{KnowledgeSource, ReferenceResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::noop::NoopKnowledge;
use crate::wikipedia::WikipediaSource;

/// Default cap on summary length, in characters.
pub const DEFAULT_MAX_SUMMARY_CHARS: usize = 500;

#[derive(Clone)]
pub struct ReferenceRetriever {
    source: Arc<dyn KnowledgeSource>,
    max_summary_chars: usize,
}

impl ReferenceRetriever {
    pub fn new(source: Arc<dyn KnowledgeSource>) -> Self {
        Self {
            source,
            max_summary_chars: DEFAULT_MAX_SUMMARY_CHARS,
        }
    }

    pub fn with_max_summary_chars(mut self, max_summary_chars: usize) -> Self {
        self.max_summary_chars = max_summary_chars;
        self
    }

    /// Wikipedia in the configured language, or nothing when lookup is disabled.
    pub fn from_config(config: &parley_config::KnowledgeConfig) -> Self {
        let source: Arc<dyn KnowledgeSource> = if config.enabled {
            Arc::new(WikipediaSource::new(
                &config.language,
                config.user_agent.clone(),
                Duration::from_secs(config.timeout_secs),
            ))
        } else {
            Arc::new(NoopKnowledge)
        };
        Self::new(source).with_max_summary_chars(config.max_summary_chars)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Look up a reference for the corrected text of `message`.
    ///
    /// Never fails: service errors are logged and reported as `None`.
    pub async fn lookup(&self, message: &ProcessedMessage) -> Option<ReferenceResult> {
        let query = message.corrected.trim();
        if query.is_empty() {
            return None;
        }

        match self.source.fetch_summary(query).await {
            Ok(Some(result)) => {
                debug!(source = self.source.name(), title = %result.title, "Reference found");
                Some(result.truncated(self.max_summary_chars))
            }
            Ok(None) => {
                debug!(source = self.source.name(), query, "No reference found");
                None
            }
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "Reference lookup failed");
                None
            }
        }
    }
}
