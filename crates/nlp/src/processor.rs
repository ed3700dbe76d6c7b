//! The message processor: normalize, annotate, classify.

use std::sync::Arc;
use parley_core::error::AnnotationError;
use parley_core::{ProcessedMessage, Tagger};
use tracing::debug;

use crate::annotator::{Annotator, TagScheme};
use crate::intent::classify;
use crate::normalizer::normalize;
use crate::tagger::LexiconTagger;

/// Composes the normalizer, annotator and intent classifier.
///
/// Stateless apart from the tagger handle, so one instance can be shared by
/// every request.
#[derive(Clone)]
pub struct MessageProcessor {
    annotator: Annotator,
}

impl MessageProcessor {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self {
            annotator: Annotator::new(tagger),
        }
    }

    /// Use a non-Penn tag convention for entity and key-phrase extraction.
    pub fn with_scheme(mut self, scheme: TagScheme) -> Self {
        self.annotator = self.annotator.with_scheme(scheme);
        self
    }

    /// Analyze one raw utterance.
    ///
    /// Only the tagger can fail; its error is returned unchanged. Empty input
    /// is valid and yields an empty statement.
    pub fn process(&self, raw: &str) -> Result<ProcessedMessage, AnnotationError> {
        let corrected = normalize(raw);
        let annotation = self.annotator.annotate(&corrected)?;
        let intent = classify(&corrected);

        debug!(
            tagger = self.annotator.tagger_name(),
            %intent,
            tokens = annotation.tokens.len(),
            entities = annotation.entities.len(),
            "Processed message"
        );

        Ok(ProcessedMessage {
            original: raw.to_string(),
            corrected,
            tokens: annotation.tokens,
            entities: annotation.entities,
            intent,
            key_phrases: annotation.key_phrases,
        })
    }
}

impl Default for MessageProcessor {
    fn default() -> Self {
        Self::new(Arc::new(LexiconTagger))
    }
}
