//! The chat service: one user message in, one cleaned reply out.
//!
//! Per request the pipeline is strictly sequential:
//! process → reference lookup → context read → compose → generate →
//! postprocess → append exchange. Only the last step mutates shared state,
//! and it is skipped entirely when generation fails.

use parley_core::conversation::ConversationStore;
use parley_core::error::{AnnotationError, ProviderError};
use parley_core::message::{ConversationId, PromptMessage};
use parley_core::provider::{Provider, ProviderRequest};
use parley_knowledge::ReferenceRetriever;
use parley_memory::InMemoryConversationStore;
use parley_nlp::MessageProcessor;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::composer::{compose, postprocess};

/// Shown to the user whenever generation fails.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble generating a response right now. Please try again.";

/// A request the service could not handle at all.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message processing failed: {0}")]
    Annotation(#[from] AnnotationError),
}

/// The outcome of one chat turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    /// Cleaned reply text, or [`FALLBACK_REPLY`]
    pub response: String,

    /// Where the exchange was stored. On fallback nothing is stored and this
    /// echoes the identifier the caller supplied, if any.
    pub conversation_id: Option<ConversationId>,

    /// URLs of references used to ground the reply
    pub sources: Vec<String>,
}

/// Sampling settings sent with every generation request.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl GenerationSettings {
    pub fn from_config(config: &parley_config::AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: Some(config.top_p),
            max_tokens: config.max_tokens,
        }
    }
}

/// Orchestrates the processor, retriever, store and provider.
#[derive(Clone)]
pub struct ChatService {
    processor: MessageProcessor,
    retriever: ReferenceRetriever,
    store: Arc<dyn ConversationStore>,
    provider: Arc<dyn Provider>,
    settings: GenerationSettings,
}

impl ChatService {
    pub fn new(
        processor: MessageProcessor,
        retriever: ReferenceRetriever,
        store: Arc<dyn ConversationStore>,
        provider: Arc<dyn Provider>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            processor,
            retriever,
            store,
            provider,
            settings,
        }
    }

    /// Wire up the default components from configuration.
    pub fn from_config(config: &parley_config::AppConfig) -> Self {
        let store = Arc::new(InMemoryConversationStore::with_max_context_length(
            config.conversation.max_context_length,
        ));
        let service = Self::new(
            MessageProcessor::default(),
            ReferenceRetriever::from_config(&config.knowledge),
            store,
            parley_providers::build_from_config(config),
            GenerationSettings::from_config(config),
        );
        info!(
            provider = service.provider.name(),
            model = %service.settings.model,
            knowledge = service.retriever.source_name(),
            store = service.store.name(),
            "Chat service ready"
        );
        service
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn processor(&self) -> &MessageProcessor {
        &self.processor
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    /// Whether the generation service answers its health probe.
    ///
    /// Probe errors count as unreachable and are logged at warn.
    pub async fn generator_reachable(&self) -> bool {
        match self.provider.health_check().await {
            Ok(true) => true,
            Ok(false) => {
                warn!(provider = self.provider.name(), "Generator health probe failed");
                false
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Generator unreachable");
                false
            }
        }
    }

    /// One generation attempt. The raw text is returned untouched.
    pub async fn generate(&self, messages: Vec<PromptMessage>) -> Result<String, ProviderError> {
        let request = ProviderRequest {
            model: self.settings.model.clone(),
            messages,
            temperature: self.settings.temperature,
            top_p: self.settings.top_p,
            max_tokens: self.settings.max_tokens,
        };
        let response = self.provider.complete(request).await?;
        if let Some(usage) = &response.usage {
            debug!(
                model = %response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Generation finished"
            );
        }
        Ok(response.content)
    }

    /// Handle one user message.
    ///
    /// Only message processing can fail the request. A generation failure is
    /// logged, leaves the conversation untouched and yields [`FALLBACK_REPLY`].
    pub async fn respond(
        &self,
        message: &str,
        conversation_id: Option<ConversationId>,
    ) -> Result<ChatReply, ChatError> {
        let processed = self.processor.process(message)?;
        let reference = self.retriever.lookup(&processed).await;

        let context = match &conversation_id {
            Some(id) => self.store.get_context(id).await,
            None => Vec::new(),
        };

        let prompt = compose(&processed, &context, reference.as_ref());
        let sources: Vec<String> = reference
            .iter()
            .map(|r| r.url.clone())
            .filter(|url| !url.is_empty())
            .collect();

        match self.generate(prompt).await {
            Ok(raw) => {
                let response = postprocess(&raw);
                // History keeps what the user actually typed.
                let id = self
                    .store
                    .append_exchange(conversation_id, message, &response)
                    .await;
                debug!(conversation_id = %id, intent = %processed.intent, "Replied");
                Ok(ChatReply {
                    response,
                    conversation_id: Some(id),
                    sources,
                })
            }
            Err(e) => {
                error!(
                    provider = self.provider.name(),
                    model = %self.settings.model,
                    error = %e,
                    "Generation failed; sending fallback reply"
                );
                Ok(ChatReply {
                    response: FALLBACK_REPLY.to_string(),
                    conversation_id,
                    sources,
                })
            }
        }
    }
}
