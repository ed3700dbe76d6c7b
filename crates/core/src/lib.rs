//! # Parley Core
//!
//! Domain types, traits, and error definitions for the Parley conversational
//! assistant. This crate has **zero framework dependencies**: it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is a trait here: the linguistic tagger, the
//! text-generation provider, the knowledge source and the conversation store.
//! Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with scripted/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod analysis;
pub mod conversation;
pub mod error;
pub mod knowledge;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use analysis::{Entity, Intent, ProcessedMessage, TaggedToken, Tagger};
pub use conversation::{ConversationStore, DEFAULT_MAX_CONTEXT_LENGTH};
pub use error::{AnnotationError, KnowledgeError, ProviderError};
pub use knowledge::{KnowledgeSource, ReferenceResult};
pub use message::{Conversation, ConversationId, PromptMessage, Role, Turn, TurnRole};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
