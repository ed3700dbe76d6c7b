//! A knowledge source that never knows anything.

use async_trait::async_trait;
use parley_core::error::KnowledgeError;
use parley_core::knowledge::{KnowledgeSource, ReferenceResult};

/// Used when reference lookup is disabled in configuration.
pub struct NoopKnowledge;

#[async_trait]
impl KnowledgeSource for NoopKnowledge {
    fn name(&self) -> &str {
        "none"
    }

    async fn fetch_summary(&self, _query: &str) -> Result<Option<ReferenceResult>, KnowledgeError> {
        Ok(None)
    }
}
